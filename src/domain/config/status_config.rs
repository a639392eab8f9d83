pub struct StatusConfig;

impl StatusConfig {
    pub const STATUS_PORT: u16 = 45460;
    pub const BIND_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_APP_NAME: &'static str = "instance-identity";
    pub const APP_NAME_ENV_VAR: &'static str = "INSTANCE_APP_NAME";
}
