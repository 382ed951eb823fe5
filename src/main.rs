fn main() {
    if let Err(e) = moviefinder_lib::run() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
