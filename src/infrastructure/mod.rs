pub mod toml_directory;
