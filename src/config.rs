use envconfig::Envconfig;

#[derive(Envconfig)]
pub struct Config {
    /// Base URL of the messaging server; `/upload` is resolved against it.
    #[envconfig(from = "UPLOADER_SERVER_URL", default = "http://127.0.0.1:8001")]
    pub server_url: String,
}
