//! Server command implementation

use std::path::Path;

use anyhow::Result;
use coach_core::RuleConfig;

pub async fn cmd_serve(
    rules: RuleConfig,
    host: &str,
    port: u16,
    static_dir: Option<&Path>,
    allow_origins: Vec<String>,
) -> Result<()> {
    println!("🚀 Starting Coach web server...");
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }
    if allow_origins.is_empty() {
        println!("   🌐 CORS: any origin");
    } else {
        println!("   🌐 CORS: {}", allow_origins.join(", "));
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let config = coach_server::ServerConfig {
        allowed_origins: allow_origins,
        static_dir: static_dir.map(Path::to_path_buf),
    };

    coach_server::serve_with_config(rules, host, port, config).await?;

    Ok(())
}
