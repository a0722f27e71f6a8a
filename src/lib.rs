/// 内部实现模块
mod internal;


/// 导出核心入口：共享会话与显式客户端
pub use internal::session::structs::webdav_client::WebdavClient;
pub use internal::session::structs::webdav_session::WebdavSession;
pub use internal::webdav::structs::webdav_error::{
    TransportError, WebdavError, WebdavResult,
};

pub mod auth {
    use crate::internal;
    pub use internal::auth::structs::auth_config::{env_var_names, AuthConfig};
    pub use internal::auth::structs::auth_error::AuthError;
    pub use internal::auth::structs::credential_store::CredentialStore;
    pub use internal::auth::structs::webdav_auth::WebdavAuth;
}

/// 对外提供webdav基础访问能力，不能限制死在会话中，以防有人自己要用
pub mod webdav {
    pub mod functions {
        use crate::internal;
        pub use internal::webdav::functions::move_resource::*;
        pub use internal::webdav::functions::put_directory::put_directory;
        pub use internal::webdav::functions::put_file::*;
        pub use internal::webdav::functions::resource::{
            delete, get, head, mkcol, put,
        };
    }

    pub mod enums {
        use crate::internal;
        pub use internal::webdav::enums::*;
    }

    pub mod traits {
        use crate::internal;
        pub use internal::webdav::traits::local_fs::LocalFs;
        pub use internal::webdav::traits::transport::WebdavTransport;
    }

    pub mod structs {
        use crate::internal;
        pub use internal::webdav::structs::directory_upload::*;
        pub use internal::webdav::structs::move_retry_policy::*;
        pub use internal::webdav::structs::request_outcome::*;
        pub use internal::webdav::structs::upload_source::*;
        pub use internal::webdav::structs::webdav_request::*;
    }

    pub mod impl_traits {
        use crate::internal;
        pub use internal::webdav::impl_traits::reqwest_transport::ReqwestTransport;
        pub use internal::webdav::impl_traits::tokio_local_fs::{
            TokioFs, UPLOAD_CHUNK_SIZE,
        };
    }
}
