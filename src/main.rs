#[tokio::main]
async fn main() {
  // Minimal CLI: support --version/-V and --help/-h
  let mut args = std::env::args().skip(1);
  if let Some(arg) = args.next() {
    if arg == "--version" || arg == "-V" {
      println!("signlog {}", env!("CARGO_PKG_VERSION"));
      return;
    }
    if arg == "--help" || arg == "-h" {
      eprintln!("Usage: signlog [--version]");
      eprintln!();
      eprintln!("Environment:");
      eprintln!("  SIGNLOG_DATABASE         sqlx URL (default sqlite://db/isl_logs.db)");
      eprintln!("  SIGNLOG_ADDR             bind address (default 0.0.0.0:8080)");
      eprintln!("  SIGNLOG_MAX_CONNECTIONS  pool size (default 5)");
      return;
    }
  }

  if let Err(e) = signlog::app::run().await {
    eprintln!("error: {e}");
    std::process::exit(1);
  }
}
