//! # Configuration Module / 配置模块
//!
//! This module resolves the reporter configuration from a `.properties` file
//! and optional programmatic overrides. Builder-supplied values win over file
//! values; file values win over built-in defaults.
//!
//! 此模块从 `.properties` 文件和可选的程序化覆盖中解析报告器配置。
//! 构建器提供的值优先于文件值；文件值优先于内置默认值。

use crate::error::{Error, Result};
use crate::infra::properties::Properties;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

/// Properties key for the TestRail URL, e.g. `https://my-corp.testrail.io`.
/// TestRail URL 的 properties 键，例如 `https://my-corp.testrail.io`。
pub const CLIENT_KEY: &str = "ngtotr.client";
/// Properties key for the TestRail user.
pub const USER_KEY: &str = "ngtotr.user";
/// Properties key for the TestRail password or API key.
pub const PASSWORD_KEY: &str = "ngtotr.password";
/// Properties key for the run-and-case identification flag.
pub const USING_RUN_CASE_KEY: &str = "ngtotr.using.run.case";

/// Default location of the properties file, relative to the working directory
/// of the host harness. There is no key for the run ID in the file.
/// properties 文件的默认位置，相对于宿主框架的工作目录。
/// 文件中没有 run ID 对应的键。
pub const DEFAULT_PROPERTIES_PATH: &str = "testrail.properties";

/// The resolved reporter configuration.
///
/// `run_id == 0` means "unset": reporting is disabled and every report call
/// becomes a logged no-op.
///
/// 解析后的报告器配置。
/// `run_id == 0` 表示“未设置”：报告被禁用，每次报告调用都变成记录日志的空操作。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// TestRail URL of the client / 客户端的 TestRail URL
    pub client: String,
    /// TestRail user / TestRail 用户
    pub user: String,
    /// TestRail password or API key / TestRail 密码或 API 密钥
    pub password: String,
    /// If `true` (recommended), tests are identified by a stable case ID and
    /// only the run ID changes between runs. If `false`, every run requires
    /// renaming the test annotations.
    /// 如果为 `true`（推荐），测试由稳定的 case ID 标识，运行之间只有 run ID 变化。
    /// 如果为 `false`，每次运行都需要重新命名测试注解。
    pub using_run_case: bool,
    /// TestRail run ID; 0 disables reporting / TestRail run ID；0 表示禁用报告
    pub run_id: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client: String::new(),
            user: String::new(),
            password: String::new(),
            using_run_case: true,
            run_id: 0,
        }
    }
}

/// The values loaded from the properties file. The run ID has no file key and
/// is therefore not part of the file-sourced defaults.
/// 从 properties 文件加载的值。run ID 没有文件键，因此不属于文件默认值。
#[derive(Debug, Clone)]
struct FileDefaults {
    client: String,
    user: String,
    password: String,
    using_run_case: bool,
}

impl FileDefaults {
    fn load(path: &Path) -> Result<Self> {
        let props = Properties::load(path)?;
        Ok(Self {
            client: props.get_or(CLIENT_KEY, ""),
            user: props.get_or(USER_KEY, ""),
            password: props.get_or(PASSWORD_KEY, ""),
            using_run_case: parse_using_run_case(props.get(USING_RUN_CASE_KEY)),
        })
    }
}

/// Parses the `ngtotr.using.run.case` property. This is a deliberate
/// default-true, explicit-opt-out policy: a blank or missing value is `true`;
/// otherwise the trimmed value must equal "true" case-insensitively, and any
/// other content is `false` ("TRUE", " true ", "" are all true; "false",
/// "no", "1" are false).
///
/// 解析 `ngtotr.using.run.case` 属性。这是刻意的“默认 true、显式退出”策略：
/// 空白或缺失的值为 `true`；否则修剪后的值必须不区分大小写地等于 "true"，
/// 任何其他内容均为 `false`。
pub(crate) fn parse_using_run_case(value: Option<&str>) -> bool {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().eq_ignore_ascii_case("true"),
        _ => true,
    }
}

struct StoreState {
    path: PathBuf,
    config: Config,
}

/// The owned configuration context handed to the reporter.
///
/// Holds the resolved [`Config`] together with the current properties-file
/// path. Interior locking keeps reads and writes safe when the host harness
/// runs tests on parallel threads; the intended lifecycle is still to
/// establish the configuration once before the run starts.
///
/// 交给报告器的自有配置上下文。
/// 持有解析后的 [`Config`] 和当前的 properties 文件路径。
/// 内部锁保证宿主框架在并行线程上运行测试时读写安全；
/// 预期的生命周期仍然是在运行开始前一次性建立配置。
pub struct ConfigStore {
    state: RwLock<StoreState>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore {
    /// Creates a store with built-in defaults and the default properties
    /// path. No file is touched until one of the `init_*` calls.
    /// 使用内置默认值和默认 properties 路径创建存储。
    /// 在调用任一 `init_*` 之前不会接触任何文件。
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                path: PathBuf::from(DEFAULT_PROPERTIES_PATH),
                config: Config::default(),
            }),
        }
    }

    /// Initializes the configuration from the current properties file.
    /// The run ID is left untouched, since the file has no key for it.
    /// 从当前 properties 文件初始化配置。run ID 保持不变，因为文件中没有对应的键。
    pub fn init_from_default_file(&self) -> Result<()> {
        let path = self.properties_path();
        let defaults = FileDefaults::load(&path)?;
        self.write_defaults(defaults);
        Ok(())
    }

    /// Initializes from the current properties file and sets the run ID.
    /// 从当前 properties 文件初始化并设置 run ID。
    pub fn init_with_run(&self, run_id: u32) -> Result<()> {
        self.init_from_default_file()?;
        self.set_run_id(run_id);
        Ok(())
    }

    /// Changes the properties-file location and initializes from it.
    /// 更改 properties 文件位置并从中初始化。
    pub fn init_from_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.set_properties_path(path)?;
        self.init_from_default_file()
    }

    /// Changes the properties-file location, initializes from it and sets
    /// the run ID.
    /// 更改 properties 文件位置，从中初始化并设置 run ID。
    pub fn init_from_file_with_run(&self, path: impl AsRef<Path>, run_id: u32) -> Result<()> {
        self.init_from_file(path)?;
        self.set_run_id(run_id);
        Ok(())
    }

    /// Applies a builder-supplied override object on top of freshly loaded
    /// file values. See [`ConfigOverrides`] for the resolution rules.
    /// 在新加载的文件值之上应用构建器提供的覆盖对象。
    /// 解析规则见 [`ConfigOverrides`]。
    pub fn apply(&self, overrides: &ConfigOverrides) -> Result<()> {
        let path = self.properties_path();
        let defaults = FileDefaults::load(&path)?;
        let mut state = self.write_state();
        state.config.client = pick(overrides.client.as_deref(), defaults.client);
        state.config.user = pick(overrides.user.as_deref(), defaults.user);
        state.config.password = pick(overrides.password.as_deref(), defaults.password);
        state.config.using_run_case = overrides
            .using_run_case
            .unwrap_or(defaults.using_run_case);
        // The run ID is always written last and always wins. An override
        // object that never set one carries the builder default of 0,
        // which resets reporting to disabled.
        // run ID 总是最后写入并总是生效。未设置 run ID 的覆盖对象
        // 携带构建器默认值 0，这会将报告重置为禁用状态。
        state.config.run_id = overrides.run_id.unwrap_or(0);
        Ok(())
    }

    /// Changes the run ID directly; set to 0 if not using.
    /// 直接更改 run ID；不使用时设置为 0。
    pub fn set_run_id(&self, run_id: u32) {
        let mut state = self.write_state();
        state.config.run_id = run_id;
        info!(run_id, "run ID changed");
    }

    /// Chooses between run-and-case (`true`, recommended) and test-based
    /// (`false`) identification.
    /// 在 run-and-case（`true`，推荐）和基于 test（`false`）的标识之间选择。
    pub fn set_using_run_case(&self, using_run_case: bool) {
        let mut state = self.write_state();
        state.config.using_run_case = using_run_case;
    }

    /// Changes the properties-file location without loading it.
    ///
    /// Fails with [`Error::InvalidInput`] when the path is blank or does not
    /// reference an existing regular file.
    ///
    /// 更改 properties 文件位置但不加载。
    /// 当路径为空白或不指向现有普通文件时，以 [`Error::InvalidInput`] 失败。
    pub fn set_properties_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() || path.to_string_lossy().trim().is_empty() {
            return Err(Error::InvalidInput(
                "properties file path is blank".to_string(),
            ));
        }
        if !path.is_file() {
            return Err(Error::InvalidInput(format!(
                "path does not reference a regular file: {}",
                path.display()
            )));
        }
        let mut state = self.write_state();
        state.path = path.to_path_buf();
        Ok(())
    }

    /// The current properties-file location.
    pub fn properties_path(&self) -> PathBuf {
        self.read_state().path.clone()
    }

    /// A cloned copy of the current configuration, taken once per report
    /// attempt so a single post works against a consistent view.
    /// 当前配置的克隆副本，每次报告尝试获取一次，
    /// 以便单次提交基于一致的视图。
    pub fn snapshot(&self) -> Config {
        self.read_state().config.clone()
    }

    /// Returns the whole stored configuration as a fixed five-line,
    /// human-readable dump, for diagnostics.
    /// 以固定的五行人类可读格式返回整个已保存配置，用于诊断。
    pub fn describe(&self) -> String {
        let config = self.snapshot();
        format!(
            "Client: {}\nUser: {}\nPassword: {}\nUsingRunCase: {}\nRunID: {}",
            config.client, config.user, config.password, config.using_run_case, config.run_id
        )
    }

    fn write_defaults(&self, defaults: FileDefaults) {
        let mut state = self.write_state();
        state.config.client = defaults.client;
        state.config.user = defaults.user;
        state.config.password = defaults.password;
        state.config.using_run_case = defaults.using_run_case;
    }

    /// Poisoning is recovered: a panic in a host thread degrades reporting
    /// only, never the test run.
    /// 锁中毒会被恢复：宿主线程中的 panic 只会降级报告，绝不影响测试运行。
    fn read_state(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Resolves one override field: an absent or blank override falls back to
/// the freshly loaded file value, anything else wins verbatim.
/// 解析单个覆盖字段：缺失或空白的覆盖回退到新加载的文件值，
/// 其他情况覆盖值原样生效。
fn pick(overridden: Option<&str>, fallback: String) -> String {
    match overridden {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => fallback,
    }
}

/// Builder-style override object for overwriting any settings read from the
/// properties file.
///
/// Every field is tri-state: a field that was never set falls back to the
/// file value at [`ConfigStore::apply`] time. The run ID can also be set from
/// here, as there is no key for it in the properties file.
///
/// 用于覆盖从 properties 文件读取的任何设置的构建器风格覆盖对象。
/// 每个字段都是三态的：从未设置的字段在 [`ConfigStore::apply`] 时回退到文件值。
/// run ID 也可以在这里设置，因为 properties 文件中没有对应的键。
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    client: Option<String>,
    user: Option<String>,
    password: Option<String>,
    using_run_case: Option<bool>,
    run_id: Option<u32>,
}

impl ConfigOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// TestRail URL of the client, e.g. `https://my-corp.testrail.io`.
    pub fn client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    /// TestRail user.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// TestRail password or API key.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Overrides the run-and-case flag. Left unset, the file value is used.
    pub fn using_run_case(mut self, using_run_case: bool) -> Self {
        self.using_run_case = Some(using_run_case);
        self
    }

    /// TestRail run ID for this run. Left unset, applying the overrides
    /// resets the run ID to 0 (reporting disabled).
    /// 本次运行的 TestRail run ID。未设置时，应用覆盖会将 run ID
    /// 重置为 0（禁用报告）。
    pub fn run_id(mut self, run_id: u32) -> Self {
        self.run_id = Some(run_id);
        self
    }

    /// Applies this override object to the store. Convenience for
    /// [`ConfigStore::apply`].
    pub fn apply_to(&self, store: &ConfigStore) -> Result<()> {
        store.apply(self)
    }
}
