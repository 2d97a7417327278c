use clap::Parser;
use flat_hash::HashMap;

#[derive(Parser, Debug)]
struct Args {
    /// Number of integer entries to fill after the greeting pairs.
    #[arg(short = 'n', long = "fill", default_value_t = 1000)]
    fill: u64,
}

fn main() {
    let args = Args::parse();

    let mut map: HashMap<String, i32> = HashMap::new();
    map.insert("hello".to_string(), 1);
    map.insert("world".to_string(), 2);

    for (key, value) in map.iter() {
        print!("{key} {value} ");
    }
    println!();

    let mut filled: HashMap<u64, u64> = HashMap::new();
    for key in 0..args.fill {
        filled.insert(key, key * key);
    }
    println!(
        "filled {} entries, {} slots allocated",
        filled.len(),
        filled.capacity()
    );
}
