use manifestgen_core::Generator;

pub struct ShowConfig;

impl ShowConfig {
    pub fn execute(generator: &Generator, verbose: bool) -> anyhow::Result<()> {
        if verbose {
            println!("# project root: {}", generator.project_root().display());
        }

        print!("{}", generator.config().to_toml()?);
        Ok(())
    }
}
