//! errclass-core
//!
//! Define error categories at runtime and build errors from them.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（errors, name, fields, instance）
//! - **category**: ErrorCategory（再利用可能なコンストラクタ）と CategoryBuilder
//! - **trace**: trace 取得（内部フレームを除外）
//! - **factory**: JSON 形式の引数を受け取る `create`
//!
//! ```ignore
//! use serde_json::json;
//!
//! let not_found = errclass_core::create(
//!     Some(&json!("NotFoundError")),
//!     Some(&json!({"status": 404, "message": "Resource not found"})),
//! )?;
//!
//! let err = not_found.construct(())?;
//! assert_eq!(err.to_string(), "NotFoundError: Resource not found");
//! ```

pub mod category;
pub mod domain;
pub mod factory;
pub mod trace;

pub use category::{CategoryBuilder, ConstructArgs, ErrorCategory};
pub use domain::{CategoryName, ErrorInstance, Fields, ValidationError};
pub use factory::create;
pub use trace::TraceConfig;
