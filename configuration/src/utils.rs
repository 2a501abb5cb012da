/// Get specified env var with format `NETWORK_VAR` OR get `DEFAULT_VAR` if
/// network-specific not present. Blank values count as not present.
pub fn network_or_default_from_env(network: &str, var: &str) -> Option<String> {
    let read = |name: String| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

    read(format!("{}_{}", network.to_uppercase(), var)).or_else(|| read(format!("DEFAULT_{}", var)))
}
