//! Canonical logging macros
//!
//! Every session operation is bracketed by exactly one start event and one
//! end (or end_error) event carrying the same `op`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use dishmenu_core::log_op_start;
/// log_op_start!("insert_dish");
/// log_op_start!("find_dish", dish_id = 7);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use dishmenu_core::log_op_end;
/// log_op_end!("insert_dish", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `DmError`.
///
/// # Example
///
/// ```
/// # use dishmenu_core::{log_op_error, errors::MenuError};
/// let err = MenuError::ConnectionStringMissing { name: "DefaultConnection".to_string() };
/// log_op_error!("load_settings", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let dm_err: $crate::errors::DmError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?dm_err.kind(),
            err_code = dm_err.code(),
            err_message = dm_err.message(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let dm_err: $crate::errors::DmError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?dm_err.kind(),
            err_code = dm_err.code(),
            err_message = dm_err.message(),
            $($field)*
        );
    }};
}
