//! Runs embedded `PostgreSQL` lifecycle steps as an unprivileged user.
//!
//! Usage:
//!
//! ```text
//! pg_worker <setup|start|stop> <config-path>
//! ```
//!
//! `config-path` names a JSON [`WorkerPayload`] holding the cluster settings
//! and the environment to apply before the step runs. When started as root
//! the worker re-executes itself as `nobody`, because `initdb` and
//! `postgres` refuse to run as root.
//!
//! [`WorkerPayload`]: pg_embedded_setup_unpriv::worker::WorkerPayload

/// Boxed error returned from `main`.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[cfg(unix)]
fn main() -> Result<(), BoxError> {
    let args = lifecycle::collect_args()?;
    lifecycle::reexec_unprivileged(&args)?;
    lifecycle::run(&args).map_err(Into::into)
}

#[cfg(not(unix))]
fn main() -> Result<(), BoxError> {
    Err("pg_worker requires a Unix platform".into())
}

#[cfg(unix)]
mod lifecycle {
    use camino::{Utf8Path, Utf8PathBuf};
    use nix::unistd::{Uid, User, initgroups, setgid, setuid};
    use pg_embedded_setup_unpriv::ambient_dir_and_path;
    use pg_embedded_setup_unpriv::worker::{PlainSecret, WorkerPayload};
    use postgresql_embedded::{PostgreSQL, Status};
    use std::env;
    use std::ffi::CString;
    use std::io::{self, Read};
    use std::process::{Command, ExitStatus};
    use thiserror::Error;

    const REEXEC_MARKER: &str = "PG_WORKER_REEXEC";
    const TRUSTED_PATH: &str = "/usr/sbin:/usr/bin:/sbin:/bin";
    const UNPRIVILEGED_USER: &str = "nobody";

    #[derive(Debug, Error)]
    pub(crate) enum LifecycleError {
        #[error("invalid arguments: {0}")]
        Arguments(String),
        #[error("failed to read worker config: {0}")]
        ConfigRead(#[source] super::BoxError),
        #[error("failed to parse worker config: {0}")]
        ConfigParse(#[source] serde_json::Error),
        #[error("invalid cluster settings: {0}")]
        Settings(String),
        #[error("failed to build runtime: {0}")]
        Runtime(#[source] io::Error),
        #[error("failed to drop privileges: {0}")]
        Privileges(String),
        #[error("postgres {step} failed: {message}")]
        Postgres { step: &'static str, message: String },
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) enum Step {
        Setup,
        Start,
        Stop,
    }

    impl Step {
        pub(crate) fn parse(raw: &str) -> Result<Self, LifecycleError> {
            match raw {
                "setup" => Ok(Self::Setup),
                "start" => Ok(Self::Start),
                "stop" => Ok(Self::Stop),
                other => Err(LifecycleError::Arguments(format!(
                    "unknown step '{other}'; expected setup, start, or stop"
                ))),
            }
        }

        const fn label(self) -> &'static str {
            match self {
                Self::Setup => "setup",
                Self::Start => "start",
                Self::Stop => "stop",
            }
        }
    }

    pub(crate) fn collect_args() -> Result<Vec<Utf8PathBuf>, LifecycleError> {
        env::args_os()
            .map(|raw| {
                raw.into_string()
                    .map(Utf8PathBuf::from)
                    .map_err(|_| LifecycleError::Arguments("argument is not valid UTF-8".into()))
            })
            .collect()
    }

    /// Splits `args` (program name first) into the step and config path.
    pub(crate) fn parse_args(args: &[Utf8PathBuf]) -> Result<(Step, &Utf8Path), LifecycleError> {
        match args {
            [_, step, config] => Ok((Step::parse(step.as_str())?, config.as_path())),
            [_, _, _, extra, ..] => Err(LifecycleError::Arguments(format!(
                "unexpected extra argument: {extra}"
            ))),
            _ => Err(LifecycleError::Arguments(
                "expected <setup|start|stop> <config-path>".into(),
            )),
        }
    }

    /// Quotes `value` for a POSIX shell command line.
    pub(crate) fn shell_quote(value: &str) -> String {
        format!("'{}'", value.replace('\'', "'\\''"))
    }

    pub(crate) fn reexec_unprivileged(args: &[Utf8PathBuf]) -> Result<(), LifecycleError> {
        if !Uid::effective().is_root() || env::var_os(REEXEC_MARKER).is_some() {
            return Ok(());
        }

        let exe = env::current_exe()
            .map_err(LifecycleError::Runtime)?
            .into_os_string()
            .into_string()
            .map(Utf8PathBuf::from)
            .map_err(|_| LifecycleError::Runtime(io::Error::other("executable path is not UTF-8")))?;
        let forwarded = args.get(1..).unwrap_or_default();

        let status = match Command::new("runuser")
            .args(["-u", UNPRIVILEGED_USER, "--"])
            .arg(exe.as_std_path())
            .args(forwarded.iter().map(|arg| arg.as_std_path()))
            .env(REEXEC_MARKER, "1")
            .env("PATH", TRUSTED_PATH)
            .status()
        {
            Ok(status) => status,
            Err(err) if err.kind() == io::ErrorKind::NotFound => reexec_via_su(&exe, forwarded)?,
            Err(err) => return Err(LifecycleError::Privileges(err.to_string())),
        };
        std::process::exit(status.code().unwrap_or(1));
    }

    fn reexec_via_su(exe: &Utf8Path, forwarded: &[Utf8PathBuf]) -> Result<ExitStatus, LifecycleError> {
        let command = std::iter::once(exe.as_str())
            .chain(forwarded.iter().map(|p| p.as_str()))
            .map(shell_quote)
            .fold(format!("{REEXEC_MARKER}=1 exec"), |line, part| format!("{line} {part}"));

        Command::new("/bin/su")
            .args(["-s", "/bin/sh", UNPRIVILEGED_USER, "-c"])
            .arg(command)
            .env("PATH", TRUSTED_PATH)
            .status()
            .map_err(|err| LifecycleError::Privileges(err.to_string()))
    }

    pub(crate) fn run(args: &[Utf8PathBuf]) -> Result<(), LifecycleError> {
        let (step, config_path) = parse_args(args)?;
        let payload = load_payload(config_path)?;
        drop_privileges()?;
        let settings = payload
            .settings
            .into_settings()
            .map_err(|err| LifecycleError::Settings(err.to_string()))?;
        apply_environment(&payload.environment);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(LifecycleError::Runtime)?;
        let postgres = PostgreSQL::new(settings);
        runtime.block_on(perform(step, postgres))
    }

    async fn perform(step: Step, mut postgres: PostgreSQL) -> Result<(), LifecycleError> {
        let failed = |err: postgresql_embedded::Error| LifecycleError::Postgres {
            step: step.label(),
            message: err.to_string(),
        };
        match step {
            Step::Setup => {
                postgres.setup().await.map_err(failed)?;
                ensure_started(&mut postgres).await.map_err(failed)
            }
            Step::Start => {
                ensure_started(&mut postgres).await.map_err(failed)?;
                // The server must outlive this process.
                std::mem::forget(postgres);
                Ok(())
            }
            Step::Stop => postgres.stop().await.map_err(failed),
        }
    }

    async fn ensure_started(postgres: &mut PostgreSQL) -> Result<(), postgresql_embedded::Error> {
        if matches!(postgres.status(), Status::Started) {
            return Ok(());
        }
        postgres.start().await
    }

    fn load_payload(path: &Utf8Path) -> Result<WorkerPayload, LifecycleError> {
        let bytes = read_config(path).map_err(LifecycleError::ConfigRead)?;
        serde_json::from_slice(&bytes).map_err(LifecycleError::ConfigParse)
    }

    fn read_config(path: &Utf8Path) -> Result<Vec<u8>, super::BoxError> {
        let (dir, relative) = ambient_dir_and_path(path)?;
        let mut file = dir.open(relative.as_std_path())?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        Ok(bytes)
    }

    fn drop_privileges() -> Result<(), LifecycleError> {
        if !Uid::effective().is_root() {
            return Ok(());
        }
        let privileges = |err: nix::Error| LifecycleError::Privileges(err.to_string());

        let user = User::from_name(UNPRIVILEGED_USER)
            .map_err(privileges)?
            .ok_or_else(|| {
                LifecycleError::Privileges(format!("user '{UNPRIVILEGED_USER}' not found"))
            })?;
        let name = CString::new(user.name.clone())
            .map_err(|err| LifecycleError::Privileges(err.to_string()))?;
        initgroups(&name, user.gid).map_err(privileges)?;
        setgid(user.gid).map_err(privileges)?;
        setuid(user.uid).map_err(privileges)?;

        // SAFETY: the worker is single-threaded at this point.
        unsafe {
            env::set_var("HOME", &user.dir);
            env::set_var("USER", &user.name);
            env::set_var("LOGNAME", &user.name);
        }
        Ok(())
    }

    fn apply_environment(environment: &[(String, Option<PlainSecret>)]) {
        for (key, value) in environment {
            // SAFETY: the worker is single-threaded and owns its environment.
            unsafe {
                match value {
                    Some(secret) => env::set_var(key, secret.expose()),
                    None => env::remove_var(key),
                }
            }
        }
    }
}
