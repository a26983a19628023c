use chcss::Vocabulary;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
pub struct ShowConfig {}

impl ShowConfig {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, vocabulary: &Vocabulary) -> anyhow::Result<()> {
        print!("{}", vocabulary.to_toml()?);
        Ok(())
    }
}
