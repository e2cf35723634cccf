use manifestgen_core::{Generator, Mode, OutputStatus};

pub struct Check;

impl Check {
    pub fn execute(generator: &Generator) -> anyhow::Result<()> {
        let report = generator.run(Mode::Check)?;

        for output in &report.outputs {
            match &output.status {
                OutputStatus::UpToDate => println!("up to date {}", output.path.display()),
                OutputStatus::Stale { diff } => {
                    println!("stale {}", output.path.display());
                    print!("{diff}");
                }
                OutputStatus::Written { .. } => {}
            }
        }

        report.ensure_up_to_date()
    }
}
