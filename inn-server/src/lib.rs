//! Inn Server - guesthouse booking core
//!
//! # Architecture Overview
//!
//! Server-side core of a small bed-and-breakfast management system:
//!
//! - **Pricing** (`pricing`): pure stay-pricing engine over nightly/weekly/monthly tiers
//! - **Bookings** (`bookings`): booking lifecycle state machine and orchestration
//! - **Database** (`db`): embedded SurrealDB storage
//! - **Notify** (`notify`): best-effort outbound email (SMTP)
//! - **Payments** (`payments`): hosted-checkout link construction
//!
//! # Module Structure
//!
//! ```text
//! inn-server/src/
//! ├── core/          # Configuration
//! ├── utils/         # Errors, logging
//! ├── db/            # Database layer
//! ├── pricing/       # Invoice calculation
//! ├── bookings/      # Lifecycle manager
//! ├── notify/        # Email delivery
//! └── payments/      # Checkout links
//! ```

pub mod bookings;
pub mod core;
pub mod db;
pub mod notify;
pub mod payments;
pub mod pricing;
pub mod utils;

// Re-export public types
pub use bookings::{BookingManager, BookingRequest, ManualEntry};
pub use core::Config;
pub use db::DbService;
pub use db::models::BookingRecord;
pub use notify::{Mailer, NotifyError, SmtpMailer};
pub use pricing::compute_invoice;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
