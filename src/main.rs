#[tokio::main]
async fn main() {
  // Minimal CLI: support --version/-V
  let mut args = std::env::args().skip(1);
  if let Some(arg) = args.next() {
    if arg == "--version" || arg == "-V" {
      println!("mailtrack {}", env!("CARGO_PKG_VERSION"));
      return;
    }
    if arg == "--help" || arg == "-h" {
      eprintln!("Usage: mailtrack [--version]");
      eprintln!();
      eprintln!("Environment:");
      eprintln!("  MAILTRACK_DATABASE  sqlx URL (default sqlite://mailtrack.db)");
      eprintln!("  MAILTRACK_ADDR      HTTP bind address (default 127.0.0.1:8030)");
      eprintln!("  MAILTRACK_SPOOL     directory of <account>/*.eml files to poll");
      return;
    }
  }

  if let Err(e) = mailtrack::app::run().await {
    eprintln!("error: {e}");
    std::process::exit(1);
  }
}
