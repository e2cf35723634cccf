use manifestgen_core::{Generator, ManifestKind};

use crate::cli::ManifestFormat;

pub struct Print;

impl Print {
    pub fn execute(generator: &Generator, format: ManifestFormat) -> anyhow::Result<()> {
        let kind = match format {
            ManifestFormat::Automake => ManifestKind::Automake,
            ManifestFormat::Cmake => ManifestKind::Cmake,
        };

        let tree = generator.scan()?;
        print!("{}", generator.render_one(&tree, kind).contents);
        Ok(())
    }
}
