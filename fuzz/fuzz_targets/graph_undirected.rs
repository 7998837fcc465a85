#![no_main]

use libfuzzer_sys::fuzz_target;

use grafo::{
    graph::Graph,
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
};

fuzz_target!(|ops: MutOpsSeq<i8, i8>| {
    let mut graph = Graph::new_undirected();

    for op in ops {
        op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
