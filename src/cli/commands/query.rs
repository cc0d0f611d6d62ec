use clap::{Args, Subcommand};

#[derive(Args)]
pub struct QueryCommands {
    #[command(subcommand)]
    pub command: QuerySubcommands,
}

#[derive(Subcommand)]
pub enum QuerySubcommands {
    /// Execute a SQL statement on a warehouse
    Run {
        /// SQL statement to execute
        #[arg(help = "SQL statement (e.g., 'SHOW DATABASES')")]
        query: String,
        /// HTTP path of the SQL warehouse (e.g., /sql/1.0/warehouses/abc123)
        #[arg(long)]
        http_path: String,
        /// Access token; the principal's directory token is used when omitted
        #[arg(long)]
        token: Option<String>,
        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}
