// SPDX-License-Identifier: GPL-3.0-only

pub mod database;
pub mod gesture;
pub mod models;
pub mod scheduler;
pub mod session;
pub mod settings;
pub mod utils;
