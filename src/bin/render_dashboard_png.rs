use std::fs::{self, File};
use std::path::PathBuf;

use manager_charts::api::{
    ChartKind, DashboardConfig, InMemoryRowSource, RowSource, SelectionController,
};
use manager_charts::render::CairoRenderer;

const DEFAULT_OUTPUT_DIR: &str = "target/dashboard_png";

#[derive(Debug)]
struct CliArgs {
    rows_path: PathBuf,
    config_path: Option<PathBuf>,
    manager: Option<String>,
    output_dir: PathBuf,
}

fn main() {
    let _ = manager_charts::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let raw_rows = fs::read_to_string(&args.rows_path)
        .map_err(|err| format!("failed to read rows `{}`: {err}", args.rows_path.display()))?;
    let source = InMemoryRowSource::from_json_str(&raw_rows).map_err(|err| err.to_string())?;

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            DashboardConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => DashboardConfig::default(),
    };

    let work_hours_panel = CairoRenderer::new(config.viewport).map_err(|err| err.to_string())?;
    let project_status_panel =
        CairoRenderer::new(config.viewport).map_err(|err| err.to_string())?;
    let managers = source.managers();
    let mut controller =
        SelectionController::start(source, config, work_hours_panel, project_status_panel)
            .map_err(|err| format!("failed to start dashboard: {err}"))?;

    if let Some(manager) = args.manager {
        if !managers.contains(&manager) {
            return Err(format!(
                "unknown manager `{manager}`; known managers: {}",
                managers.join(", ")
            ));
        }
        controller
            .on_selection_changed(manager)
            .map_err(|err| format!("failed to rebuild charts: {err}"))?;
    }
    let manager = controller.selection().to_owned();

    fs::create_dir_all(&args.output_dir).map_err(|err| {
        format!(
            "failed to create output dir `{}`: {err}",
            args.output_dir.display()
        )
    })?;

    for kind in ChartKind::ALL {
        let file_name = match kind {
            ChartKind::WorkHours => "work_hours.png",
            ChartKind::ProjectStatus => "project_status.png",
        };
        let output_path = args.output_dir.join(file_name);
        let mut file = File::create(&output_path).map_err(|err| {
            format!("failed to create png `{}`: {err}", output_path.display())
        })?;
        controller
            .panel(kind)
            .write_png(&mut file)
            .map_err(|err| err.to_string())?;
        println!("rendered {kind:?} for `{manager}` -> {}", output_path.display());
    }

    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut rows_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut manager: Option<String> = None;
    let mut output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--rows" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --rows".to_owned())?;
                rows_path = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--manager" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --manager".to_owned())?;
                manager = Some(value);
            }
            "--output-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output-dir".to_owned())?;
                output_dir = PathBuf::from(value);
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    let rows_path =
        rows_path.ok_or_else(|| format!("missing required --rows\n\n{}", usage_message()))?;
    Ok(CliArgs {
        rows_path,
        config_path,
        manager,
        output_dir,
    })
}

fn usage_message() -> String {
    format!(
        "usage: render_dashboard_png --rows <rows.json> [--config <config.json>] \
         [--manager <id>] [--output-dir <dir>]\n\
         \n\
         Renders the work-hours and project-status charts of one manager as PNG files.\n\
         Defaults: first manager in the rows file, output dir `{DEFAULT_OUTPUT_DIR}`."
    )
}
