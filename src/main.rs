use inventory_response_schema::checker::ResponseChecker;
use inventory_response_schema::config::CheckerConfig;
use inventory_response_schema::schema::ResponseSchema;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match CheckerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("response-schema-check: configuration error: {e}");
            std::process::exit(2);
        }
    };

    let loaded;
    let schema = match &config.schema_path {
        Some(path) => match ResponseSchema::from_path(path) {
            Ok(s) => {
                loaded = s;
                &loaded
            }
            Err(e) => {
                eprintln!("response-schema-check: cannot load {}: {e}", path.display());
                std::process::exit(2);
            }
        },
        None => ResponseSchema::builtin(),
    };

    let checker = ResponseChecker::new(schema, &config);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    match checker.run(stdin, tokio::io::stdout()).await {
        Ok(summary) => {
            eprintln!(
                "response-schema-check: {} checked, {} failed",
                summary.checked, summary.failed
            );
            if !summary.all_valid() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("response-schema-check: fatal error: {e}");
            std::process::exit(2);
        }
    }
}
