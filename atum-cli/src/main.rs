#![deny(missing_docs)]
//! Atum command-line interface.
//!
//! Scores source files locally and drives the generation endpoints of an
//! Atum server, or the built-in fallbacks when running offline.

mod client;

use atum_core::{
    CodeGenerationRequest, GenerateDocsRequest, GenerateTestsRequest, QualityReport,
    QualityReportRequest, generate_quality_report, render_json, render_quality_markdown,
    render_quality_text,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use client::{AtumClient, BackendArgs};
use std::path::{Path, PathBuf};

pub(crate) type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(name = "atum", version, about = "Atum code assistant CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct OutputArgs {
    /// Output format for report data.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write the report to a file instead of stdout.
    #[arg(long = "report-output")]
    report_output: Option<PathBuf>,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a source file with the static quality heuristics.
    Quality {
        /// Source file to score.
        #[arg(short, long)]
        file: PathBuf,
        /// Language label; inferred from the file extension when omitted.
        #[arg(long)]
        language: Option<String>,
        #[command(flatten)]
        report: OutputArgs,
    },
    /// Generate unit tests for a source file.
    Tests {
        /// Source file to test.
        #[arg(short, long)]
        file: PathBuf,
        /// Language of the source file.
        #[arg(long)]
        language: String,
        /// Test framework to target.
        #[arg(long)]
        framework: String,
        #[command(flatten)]
        backend: BackendArgs,
    },
    /// Generate Markdown documentation for a source file.
    Docs {
        /// Source file to document.
        #[arg(short, long)]
        file: PathBuf,
        /// Language label; inferred from the file extension when omitted.
        #[arg(long)]
        language: Option<String>,
        /// Project name used in the document and its filename.
        #[arg(long)]
        project_name: Option<String>,
        /// Where to write the document; defaults to the suggested filename.
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        backend: BackendArgs,
    },
    /// Generate source code from a description.
    Generate {
        /// What the code should do.
        #[arg(short, long)]
        query: String,
        /// Target language.
        #[arg(long)]
        language: String,
        #[command(flatten)]
        backend: BackendArgs,
    },
}

#[cfg(not(test))]
#[tokio::main]
async fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Quality {
            file,
            language,
            report,
        } => run_quality(&file, language, &report).await?,
        Commands::Tests {
            file,
            language,
            framework,
            backend,
        } => {
            let tests = if backend.offline {
                run_tests(&client::OfflineClient, &file, language, framework).await?
            } else {
                let client = client::ReqwestAtumClient::new(&backend.server_url)?;
                run_tests(&client, &file, language, framework).await?
            };
            println!("{tests}");
        }
        Commands::Docs {
            file,
            language,
            project_name,
            output,
            backend,
        } => {
            let path = if backend.offline {
                run_docs(&client::OfflineClient, &file, language, project_name, output).await?
            } else {
                let client = client::ReqwestAtumClient::new(&backend.server_url)?;
                run_docs(&client, &file, language, project_name, output).await?
            };
            println!("Documentation written to {}", path.display());
        }
        Commands::Generate {
            query,
            language,
            backend,
        } => {
            let code = if backend.offline {
                run_generate(&client::OfflineClient, query, language).await?
            } else {
                let client = client::ReqwestAtumClient::new(&backend.server_url)?;
                run_generate(&client, query, language).await?
            };
            println!("{code}");
        }
    }

    Ok(())
}

#[cfg(test)]
fn main() {}

async fn run_quality(file: &Path, language: Option<String>, output: &OutputArgs) -> CliResult<()> {
    let code = tokio::fs::read_to_string(file).await?;
    let request = QualityReportRequest {
        code,
        language: language.or_else(|| infer_language(file)),
    };
    let report = generate_quality_report(&request);
    emit_quality_report(&report, output).await
}

async fn run_tests<C: AtumClient + ?Sized>(
    client: &C,
    file: &Path,
    language: String,
    framework: String,
) -> CliResult<String> {
    let code = tokio::fs::read_to_string(file).await?;
    let request = GenerateTestsRequest {
        code,
        language,
        framework,
    };
    let response = client.generate_tests(&request).await?;
    ensure_ok(response.ok, &response.notes)?;
    print_notes(&response.notes);
    Ok(response.tests)
}

async fn run_docs<C: AtumClient + ?Sized>(
    client: &C,
    file: &Path,
    language: Option<String>,
    project_name: Option<String>,
    output: Option<PathBuf>,
) -> CliResult<PathBuf> {
    let code = tokio::fs::read_to_string(file).await?;
    let request = GenerateDocsRequest {
        code,
        language: language.or_else(|| infer_language(file)),
        project_name,
    };
    let response = client.generate_docs(&request).await?;
    ensure_ok(response.ok, &response.notes)?;
    print_notes(&response.notes);
    let path = output.unwrap_or_else(|| PathBuf::from(&response.filename));
    write_file(&path, response.content).await?;
    Ok(path)
}

async fn run_generate<C: AtumClient + ?Sized>(
    client: &C,
    query: String,
    language: String,
) -> CliResult<String> {
    let request = CodeGenerationRequest { query, language };
    let response = client.generate_code(&request).await?;
    ensure_ok(response.ok, &response.notes)?;
    print_notes(&response.notes);
    Ok(response.generated_code)
}

fn ensure_ok(ok: bool, notes: &[String]) -> CliResult<()> {
    if ok {
        return Ok(());
    }
    Err(notes.join("; ").into())
}

fn print_notes(notes: &[String]) {
    for note in notes {
        eprintln!("note: {note}");
    }
}

/// Map a file extension to the language label the server expects.
fn infer_language(path: &Path) -> Option<String> {
    let extension = path.extension()?.to_str()?.to_lowercase();
    let language = match extension.as_str() {
        "py" => "python",
        "js" | "mjs" | "cjs" | "jsx" => "javascript",
        "ts" | "tsx" => "typescript",
        "rs" => "rust",
        "java" => "java",
        "go" => "go",
        "rb" => "ruby",
        "c" | "h" => "c",
        "cc" | "cpp" | "hpp" => "cpp",
        "cs" => "csharp",
        "sh" => "shell",
        "sql" => "sql",
        "lua" => "lua",
        _ => return None,
    };
    Some(language.to_string())
}

async fn emit_quality_report(report: &QualityReport, output: &OutputArgs) -> CliResult<()> {
    let contents = match output.format {
        OutputFormat::Text => render_quality_text(report),
        OutputFormat::Markdown => render_quality_markdown(report),
        OutputFormat::Json => render_json(report)?,
    };
    emit_output(output, contents).await
}

async fn emit_output(output: &OutputArgs, contents: String) -> CliResult<()> {
    if let Some(path) = &output.report_output {
        write_file(path, contents).await?;
    } else {
        print!("{contents}");
    }
    Ok(())
}

async fn write_file(path: &Path, contents: String) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, contents).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        OutputArgs, OutputFormat, ensure_ok, infer_language, run_docs, run_generate, run_quality,
        run_tests,
    };
    use crate::CliResult;
    use crate::client::{AtumClient, OfflineClient};
    use atum_core::{
        CodeGenerationRequest, CodeGenerationResponse, GenerateDocsRequest, GenerateDocsResponse,
        GenerateTestsRequest, GenerateTestsResponse,
    };
    use std::future::Future;
    use std::path::{Path, PathBuf};
    use std::pin::Pin;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;

    static UNIQUE_COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn unique_dir_name() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system time")
            .as_nanos();
        let counter = UNIQUE_COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        PathBuf::from(format!("atum_cli_test_{nanos}_{counter}"))
    }

    fn write_source(root: &Path, name: &str, contents: &str) -> PathBuf {
        std::fs::create_dir_all(root).expect("create root");
        let path = root.join(name);
        std::fs::write(&path, contents).expect("write source");
        path
    }

    #[derive(Default)]
    struct RecordingClient {
        tests: Mutex<Vec<GenerateTestsRequest>>,
        docs: Mutex<Vec<GenerateDocsRequest>>,
        code: Mutex<Vec<CodeGenerationRequest>>,
    }

    impl AtumClient for RecordingClient {
        fn generate_tests<'a>(
            &'a self,
            request: &'a GenerateTestsRequest,
        ) -> Pin<Box<dyn Future<Output = CliResult<GenerateTestsResponse>> + Send + 'a>> {
            self.tests.lock().expect("tests lock").push(request.clone());
            Box::pin(async move {
                Ok(GenerateTestsResponse {
                    ok: true,
                    tests: "test('adds', () => expect(add(1, 2)).toBe(3));".to_string(),
                    language: request.language.clone(),
                    framework: request.framework.clone(),
                    notes: vec!["Tests generated successfully".to_string()],
                })
            })
        }

        fn generate_docs<'a>(
            &'a self,
            request: &'a GenerateDocsRequest,
        ) -> Pin<Box<dyn Future<Output = CliResult<GenerateDocsResponse>> + Send + 'a>> {
            self.docs.lock().expect("docs lock").push(request.clone());
            Box::pin(async move {
                Ok(GenerateDocsResponse {
                    ok: true,
                    filename: "calc_documentation_20240101_000000.md".to_string(),
                    content: "## Project Description\nCalculator.".to_string(),
                    notes: vec!["Documentation generated successfully".to_string()],
                })
            })
        }

        fn generate_code<'a>(
            &'a self,
            request: &'a CodeGenerationRequest,
        ) -> Pin<Box<dyn Future<Output = CliResult<CodeGenerationResponse>> + Send + 'a>> {
            self.code.lock().expect("code lock").push(request.clone());
            Box::pin(async move {
                Ok(CodeGenerationResponse {
                    ok: false,
                    query: request.query.clone(),
                    language: request.language.clone(),
                    generated_code: String::new(),
                    notes: vec!["Error: Language must be specified".to_string()],
                })
            })
        }
    }

    #[test]
    fn infer_language_maps_common_extensions() {
        assert_eq!(
            infer_language(Path::new("src/app.py")),
            Some("python".to_string())
        );
        assert_eq!(
            infer_language(Path::new("lib/Main.JAVA")),
            Some("java".to_string())
        );
        assert_eq!(infer_language(Path::new("README")), None);
        assert_eq!(infer_language(Path::new("notes.txt")), None);
    }

    #[test]
    fn ensure_ok_joins_notes_on_failure() {
        assert!(ensure_ok(true, &[]).is_ok());
        let err = ensure_ok(
            false,
            &["Error: Code cannot be empty".to_string(), "second".to_string()],
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Error: Code cannot be empty; second");
    }

    #[tokio::test]
    async fn run_quality_writes_markdown_report() {
        let root = std::env::temp_dir().join(unique_dir_name());
        let source = write_source(&root, "calc.py", "def add(a, b):\n    return a + b\n");
        let report_path = root.join("out/quality.md");
        let output = OutputArgs {
            format: OutputFormat::Markdown,
            report_output: Some(report_path.clone()),
        };

        run_quality(&source, None, &output)
            .await
            .expect("quality");

        let contents = std::fs::read_to_string(&report_path).expect("read report");
        assert!(contents.contains("# Atum Quality Report"));
        assert!(contents.contains("Final grade: **A+**"));
        assert!(contents.contains("python quality is within acceptable range."));
        let _ = std::fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn run_quality_writes_json_report() {
        let root = std::env::temp_dir().join(unique_dir_name());
        let source = write_source(&root, "blank.rs", "\n\n");
        let report_path = root.join("quality.json");
        let output = OutputArgs {
            format: OutputFormat::Json,
            report_output: Some(report_path.clone()),
        };

        run_quality(&source, None, &output)
            .await
            .expect("quality");

        let contents = std::fs::read_to_string(&report_path).expect("read report");
        let parsed: serde_json::Value = serde_json::from_str(&contents).expect("json");
        assert_eq!(parsed["ok"], false);
        assert_eq!(parsed["final_grade"], "F");
        assert_eq!(parsed["suggestions"][0], "Error: Code cannot be empty");
        let _ = std::fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn run_tests_sends_file_contents() {
        let root = std::env::temp_dir().join(unique_dir_name());
        let source = write_source(&root, "add.js", "function add(a, b) { return a + b; }\n");
        let client = RecordingClient::default();

        let tests = run_tests(&client, &source, "javascript".to_string(), "jest".to_string())
            .await
            .expect("tests");

        assert!(tests.contains("toBe(3)"));
        let requests = client.tests.lock().expect("tests lock");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].code, "function add(a, b) { return a + b; }\n");
        assert_eq!(requests[0].framework, "jest");
        let _ = std::fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn run_docs_writes_to_requested_path() {
        let root = std::env::temp_dir().join(unique_dir_name());
        let source = write_source(&root, "calc.rs", "fn add(a: i32, b: i32) -> i32 { a + b }\n");
        let target = root.join("docs/CALC.md");
        let client = RecordingClient::default();

        let path = run_docs(
            &client,
            &source,
            None,
            Some("Calc".to_string()),
            Some(target.clone()),
        )
        .await
        .expect("docs");

        assert_eq!(path, target);
        let contents = std::fs::read_to_string(&target).expect("read docs");
        assert_eq!(contents, "## Project Description\nCalculator.");
        let requests = client.docs.lock().expect("docs lock");
        assert_eq!(requests[0].language.as_deref(), Some("rust"));
        assert_eq!(requests[0].project_name.as_deref(), Some("Calc"));
        let _ = std::fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn run_docs_offline_uses_fallback_document() {
        let root = std::env::temp_dir().join(unique_dir_name());
        let source = write_source(&root, "main.py", "def main():\n    print('hi')\n");
        let target = root.join("README.generated.md");

        run_docs(
            &OfflineClient,
            &source,
            None,
            Some("Demo".to_string()),
            Some(target.clone()),
        )
        .await
        .expect("docs");

        let contents = std::fs::read_to_string(&target).expect("read docs");
        assert!(contents.contains("## Project Description"));
        assert!(contents.contains("The project \"Demo\""));
        assert!(contents.contains("def main():"));
        let _ = std::fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn run_generate_surfaces_validation_errors() {
        let client = RecordingClient::default();
        let err = run_generate(&client, "sort a list".to_string(), String::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Error: Language must be specified");
        assert_eq!(client.code.lock().expect("code lock").len(), 1);
    }

    #[tokio::test]
    async fn run_generate_offline_returns_stub() {
        let code = run_generate(&OfflineClient, "reverse a list".to_string(), "lua".to_string())
            .await
            .expect("code");
        assert!(code.starts_with("-- Generated lua skeleton"));
        assert!(code.contains("-- Request: reverse a list"));
    }
}
