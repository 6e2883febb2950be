//! Secrets given either directly on the command line or piped through stdin.

use std::io::Read;

use thiserror::Error;

use crate::context::FlagContext;

#[derive(Debug, Error)]
pub enum SecretError {
    #[error("the '--{flag}' and '--{stdin_flag}' options are mutually exclusive")]
    MutuallyExclusive { flag: String, stdin_flag: String },
    #[error("the '--{stdin_flag}' option was set but stdin was empty")]
    EmptyStdin { stdin_flag: String },
    #[error("failed to read secret from stdin")]
    Read(#[source] std::io::Error),
}

/// Resolve a secret from the `flag`/`stdin_flag` pair.
///
/// A non-empty `flag` value is returned as-is unless `stdin_flag` is also
/// set, which is an error. With only `stdin_flag` set, `stdin` is read to
/// the end and trimmed. With neither, the result is empty.
pub fn resolve_secret(
    ctx: &dyn FlagContext,
    flag: &str,
    stdin_flag: &str,
    stdin: &mut dyn Read,
) -> Result<String, SecretError> {
    let direct = ctx.string_flag_value(flag);
    let from_stdin = ctx.bool_flag_value(stdin_flag);

    if !direct.is_empty() {
        if from_stdin {
            return Err(SecretError::MutuallyExclusive {
                flag: flag.to_string(),
                stdin_flag: stdin_flag.to_string(),
            });
        }
        return Ok(direct);
    }
    if !from_stdin {
        return Ok(String::new());
    }

    let mut buf = String::new();
    stdin.read_to_string(&mut buf).map_err(SecretError::Read)?;
    let secret = buf.trim();
    if secret.is_empty() {
        return Err(SecretError::EmptyStdin {
            stdin_flag: stdin_flag.to_string(),
        });
    }
    tracing::debug!(flag = stdin_flag, "read secret from stdin");
    Ok(secret.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StaticContext;
    use std::io::Cursor;

    const TOKEN: &str = "access-token";
    const TOKEN_STDIN: &str = "access-token-stdin";

    #[test]
    fn direct_value_wins_without_stdin_flag() {
        let ctx = StaticContext::new("login").with_string(TOKEN, "abc");
        let mut stdin = Cursor::new("ignored");
        assert_eq!(resolve_secret(&ctx, TOKEN, TOKEN_STDIN, &mut stdin).unwrap(), "abc");
    }

    #[test]
    fn both_flags_is_an_error() {
        let ctx = StaticContext::new("login")
            .with_string(TOKEN, "abc")
            .with_bool(TOKEN_STDIN, true);
        let err = resolve_secret(&ctx, TOKEN, TOKEN_STDIN, &mut Cursor::new("")).unwrap_err();
        assert!(matches!(err, SecretError::MutuallyExclusive { .. }));
        assert_eq!(
            err.to_string(),
            "the '--access-token' and '--access-token-stdin' options are mutually exclusive"
        );
    }

    #[test]
    fn stdin_is_read_and_trimmed() {
        let ctx = StaticContext::new("login").with_bool(TOKEN_STDIN, true);
        let mut stdin = Cursor::new("  s3cr3t\n");
        assert_eq!(resolve_secret(&ctx, TOKEN, TOKEN_STDIN, &mut stdin).unwrap(), "s3cr3t");
    }

    #[test]
    fn empty_stdin_is_an_error() {
        let ctx = StaticContext::new("login").with_bool(TOKEN_STDIN, true);
        let err = resolve_secret(&ctx, TOKEN, TOKEN_STDIN, &mut Cursor::new("\n")).unwrap_err();
        assert!(matches!(err, SecretError::EmptyStdin { .. }));
    }

    #[test]
    fn neither_flag_yields_empty() {
        let ctx = StaticContext::new("login");
        assert_eq!(
            resolve_secret(&ctx, TOKEN, TOKEN_STDIN, &mut Cursor::new("x")).unwrap(),
            ""
        );
    }
}
