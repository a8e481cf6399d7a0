use figment::Jail;
use l2_config::L2Config;
use std::path::PathBuf;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("L2S_FORMAT__SYMBOL", "£");
        jail.set_env("L2S_FORMAT__DECIMALS", "1");
        jail.set_env("L2S_RENDER__NO_DATA_LABEL", "–");

        let config = L2Config::load().expect("config loads");
        assert_eq!(config.format.symbol, "£");
        assert_eq!(config.format.decimals, 1);
        assert_eq!(config.render.no_data_label, "–");
        Ok(())
    });
}

#[test]
fn env_beats_explicit_file() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[format]\nsymbol = \"€\"\n")?;
        jail.set_env("L2S_FORMAT__SYMBOL", "¥");

        let config = L2Config::load_with_file(&PathBuf::from("config.toml")).expect("config");
        assert_eq!(config.format.symbol, "¥");
        Ok(())
    });
}

#[test]
fn unrelated_env_vars_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("OTHER_FORMAT__SYMBOL", "¥");

        let config = L2Config::load().expect("config loads");
        assert_eq!(config.format.symbol, "$");
        Ok(())
    });
}
