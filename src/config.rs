#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Config {
  pub storage_dir_path: String,
}

impl Config {
  pub fn new() -> Self {
    const TODOLIST_DEFAULT_STORAGE_DIR: &str = ".todolist";
    const TODOLIST_DEFAULT_CONFIG_NAME: &str = ".todolist.json";

    let home_env = std::env::var("HOME").unwrap();
    let home = std::path::Path::new(home_env.as_str());

    let config_file_path = match std::env::var("TODOLIST_CONFIG") {
      Ok(file_path) => std::path::Path::new(&file_path).to_path_buf(),
      Err(_) => home.join(TODOLIST_DEFAULT_CONFIG_NAME),
    };

    let get_config_file = || {
      std::fs::File::options()
        .create(true)
        .write(true)
        .read(true)
        .open(config_file_path.clone())
        .unwrap()
    };

    if !config_file_path.exists() {
      let config = Self {
        storage_dir_path: home
          .join(TODOLIST_DEFAULT_STORAGE_DIR)
          .to_str()
          .unwrap()
          .to_owned(),
      };

      serde_json::to_writer_pretty(get_config_file(), &config).unwrap();
      return config;
    }

    return serde_json::from_reader(get_config_file()).unwrap();
  }
}
