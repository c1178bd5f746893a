fn main() {
    if let Err(err) = catalog_ingest::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
