/// Traces entry and exit of `$body` under `$name`.
#[macro_export]
macro_rules! log_fn {
    ($name:expr, $body:block) => {{
        let name = $name;
        log::trace!("-> {}", name);
        let result = { $body };
        log::trace!("<- {}", name);
        result
    }};
}
