pub mod config;
pub mod detect;
pub mod info;
pub mod run;

/// Parse an `H,S,V` triple such as `59,100,100`.
pub fn parse_hsv(s: &str) -> Result<[u8; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected H,S,V but got '{s}'"));
    }
    let mut out = [0u8; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse::<u8>()
            .map_err(|e| format!("invalid component '{part}': {e}"))?;
    }
    Ok(out)
}
