use super::*;

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

mod mock_filesystem;
mod mock_sponsor;

pub use mock_filesystem::*;
pub use mock_sponsor::*;
