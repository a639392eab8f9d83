use serde::Serialize;

/// Where an instance is deployed.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DataCenterInfo {
    #[default]
    MyOwn,
    Amazon,
}
