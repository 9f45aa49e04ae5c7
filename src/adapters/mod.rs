pub mod git_cli;
pub mod gogs_http;
pub mod http_downloader;
pub mod http_resource_client;
pub mod nexus_http;
pub mod process_command;
pub mod system_clock;

pub use git_cli::GitCli;
pub use gogs_http::GogsHttpApi;
pub use http_downloader::HttpDownloader;
pub use http_resource_client::{HttpResourceClient, SuccessContract};
pub use nexus_http::NexusHttpApi;
pub use process_command::CommandRunner;
pub use system_clock::SystemClock;
