#![allow(dead_code)]

pub mod factories;
pub mod fakes;

pub use factories::*;
pub use fakes::*;

/// Let spawned tasks run until they block again
pub async fn settle() {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}
