use std::{
    env,
    io::{self, BufWriter},
    path::PathBuf,
};

use anyhow::{Context, Result};
use log::info;

use langid::{config::CONFIG_ENV, corpus, prompt, AppConfig};

fn main() -> Result<()> {
    env_logger::init();

    let env_config = env::var_os(CONFIG_ENV).map(PathBuf::from);
    let config = AppConfig::load(env::args().skip(1), env_config)
        .context("failed to resolve the configuration")?;
    info!("{config:?}");

    let corpus = corpus::load(&config.corpus_dir).with_context(|| {
        format!(
            "failed to load the corpus at '{}'",
            config.corpus_dir.display()
        )
    })?;

    let net = langid::train(&config, &corpus).context("failed to train the network")?;

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    let classified = prompt::run(&net, stdin, stdout, &config.quit_token)
        .context("interactive prompt failed")?;
    info!("classified {classified} line(s), bye");

    Ok(())
}
