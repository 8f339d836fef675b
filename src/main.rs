fn main() {
    if let Err(e) = lsp_routing_stats::cli::run() {
        println!("Error: {}", e);
        std::process::exit(1);
    }
}
