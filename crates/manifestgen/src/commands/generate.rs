use manifestgen_core::{Generator, Mode, OutputStatus};

pub struct Generate;

impl Generate {
    pub fn execute(generator: &Generator, verbose: bool) -> anyhow::Result<()> {
        if verbose {
            println!("Project root: {}", generator.project_root().display());
        }

        let report = generator.run(Mode::Write)?;

        for output in &report.outputs {
            match output.status {
                OutputStatus::Written { changed: true } => {
                    println!("wrote {}", output.path.display());
                }
                OutputStatus::Written { changed: false } => {
                    println!("unchanged {}", output.path.display());
                }
                OutputStatus::UpToDate | OutputStatus::Stale { .. } => {}
            }
        }

        if verbose {
            println!("Files scanned: {}", report.files_scanned);
        }
        Ok(())
    }
}
