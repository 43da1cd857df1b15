use {clap::Parser, literate_primes::random_prime};

/// Search for a random probable prime.
#[derive(Parser, Debug)]
#[clap(name = "randprime")]
struct Cli {
    /// Size of the prime in bits, clamped to [8, 1024].
    #[clap(default_value_t = 512)]
    nbits: usize,
}

fn main() {
    let cli = Cli::parse();
    let nbits = cli.nbits.clamp(8, 1024);

    println!("Searching for a {nbits}-bit prime ...");
    let p = random_prime(&mut rand::thread_rng(), nbits);
    println!("Found prime p:");
    println!(" - {:>16} : {:?}", "p", p);
    println!("   {:>16} : {}", "Decimal", p);
}
