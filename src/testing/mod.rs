mod fake_clock;
mod fake_downloader;
mod fake_registry;
mod fake_runner;
mod fake_seeder;
mod fake_source_control;

#[allow(unused_imports)]
pub use fake_clock::FakeClock;
#[allow(unused_imports)]
pub use fake_downloader::FakeDownloader;
#[allow(unused_imports)]
pub use fake_registry::FakeRegistry;
#[allow(unused_imports)]
pub use fake_runner::{FakeRunner, Invocation};
#[allow(unused_imports)]
pub use fake_seeder::FakeSeeder;
#[allow(unused_imports)]
pub use fake_source_control::{FakeSourceControl, GogsCall};
