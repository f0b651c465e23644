use crate::{
    core::config::generate_completion,
    prelude::{convert_files, Config, FdResult},
};

pub fn init_logger(cfg: &Config) -> FdResult<()> {
    simple_logger::SimpleLogger::new()
        .with_level(cfg.log_level())
        .init()
        .map_err(anyhow::Error::from)?;
    Ok(())
}

pub fn init(cfg: &Config) -> FdResult<()> {
    if let Some(shell) = cfg.completions {
        generate_completion(shell);
        std::process::exit(0);
    }

    // the argument count is checked before touching any file
    let files = cfg.files()?;
    init_logger(cfg)?;
    convert_files(&files)?;
    Ok(())
}
