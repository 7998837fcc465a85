use grafo::{
    algo::{bellman_ford, floyd_warshall, reconstruct_path, Error},
    prelude::*,
};

fn main() -> Result<(), Error> {
    env_logger::init();

    let mut graph = Graph::new_undirected();

    graph.extend(["Prague", "Bratislava", "Vienna", "Munich", "Nuremberg", "Florence", "Rome"]);

    for (from, to, km) in [
        ("Prague", "Bratislava", 328u32),
        ("Prague", "Nuremberg", 297),
        ("Prague", "Vienna", 293),
        ("Bratislava", "Vienna", 79),
        ("Nuremberg", "Munich", 170),
        ("Vienna", "Munich", 402),
        ("Vienna", "Florence", 863),
        ("Munich", "Florence", 646),
        ("Florence", "Rome", 278),
    ] {
        if let Err(error) = graph.add_edge(from, to, km) {
            eprintln!("{error}: {:?}", error.vertex);
        }
    }

    print!("depth-first from Prague:");
    graph.depth_first_search(&"Prague", |city| print!(" {city}"))?;
    println!();

    print!("breadth-first from Prague:");
    graph.breadth_first_search(&"Prague", |city| print!(" {city}"))?;
    println!();

    let paths = ShortestPaths::on(&graph).run(&"Prague")?;
    println!("\n{:?} from Prague:", paths.algo());
    for city in graph.vertices() {
        match paths.dist(city) {
            Some(km) => println!("  {city}: {km} km"),
            None => println!("  {city}: unreachable"),
        }
    }

    let (_, pred) = bellman_ford(&graph, &"Prague")?;
    let mut route = reconstruct_path(&pred, &"Prague", &"Rome");
    route.reverse();
    println!("\nroute to Rome: {}", route.join(" - "));

    let matrix = floyd_warshall(&graph)?;
    println!("\nall pairs:");
    for (from, to, km) in matrix.iter() {
        if from < to {
            println!("  {from} - {to}: {km} km");
        }
    }

    let mut signed = Graph::new_directed();
    signed.extend(["A", "B"]);
    signed.add_edge("A", "B", -5).ok();
    signed.add_edge("B", "A", -5).ok();

    match bellman_ford(&signed, &"A") {
        Err(Error::NegativeCycle) => println!("\nA <-> B: negative cycle"),
        other => println!("\nA <-> B: {other:?}"),
    }

    Ok(())
}
