/*
    Copyright 2025 TII (SSRC) and the contributors
    SPDX-License-Identifier: Apache-2.0
*/

/// One `[Network]` section of a definition file. All values are kept as
/// the raw strings from the file; interpretation happens at the edges.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Default, Debug)]
pub struct NetworkConfig {
    pub name: Option<String>,
    pub server: Option<String>,
    pub port: Option<String>,
    pub nick: Option<String>,
    pub tls: Option<String>,
    pub autoconnect: Option<String>,
}

impl NetworkConfig {
    pub fn autoconnect_enabled(&self) -> bool {
        self.autoconnect
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }
}

/// Parses a network definition file. A file may hold any number of
/// `[Network]` sections.
pub fn parse_config(s: &str) -> Result<Vec<NetworkConfig>, String> {
    enum LineType {
        Section(String),
        Attribute(String, String),
    }

    let lexed_lines = s
        .split('\n')
        .map(str::trim)
        .enumerate()
        .filter(|(_, l)| !l.is_empty())
        .map(|(i, l)| {
            if l.starts_with('[') && l.ends_with(']') {
                Ok(LineType::Section(l[1..l.len() - 1].trim().into()))
            } else if let Some(pos) = l.chars().position(|c| c == '=') {
                Ok(LineType::Attribute(
                    l[0..pos].trim().into(),
                    l[pos + 1..l.len()].trim().into(),
                ))
            } else {
                Err(format!("Couldn't parse line {}: `{}`", i + 1, l.trim()))
            }
        })
        .collect::<Result<Vec<LineType>, String>>()?;

    let mut networks = vec![];
    let mut current: Option<NetworkConfig> = None;

    for l in lexed_lines {
        match l {
            LineType::Section(s) => match s.as_str() {
                "Network" => {
                    if let Some(done) = current.take() {
                        networks.push(done);
                    }
                    current = Some(NetworkConfig::default());
                }
                other => return Err(format!("Unexpected section name {}.", other)),
            },
            LineType::Attribute(key, value) => {
                let Some(cfg) = current.as_mut() else {
                    return Err(format!("Attribute {} outside of a section.", key));
                };
                match key.as_str() {
                    "# Name" => cfg.name = Some(value),
                    "Server" => cfg.server = Some(value),
                    "Port" => cfg.port = Some(value),
                    "Nick" => cfg.nick = Some(value),
                    "Tls" => cfg.tls = Some(value),
                    "AutoConnect" => cfg.autoconnect = Some(value),
                    k => return Err(format!("Unexpected Network configuration key {}.", k)),
                }
            }
        }
    }

    if let Some(done) = current.take() {
        networks.push(done);
    }

    Ok(networks)
}

pub fn write_config(networks: &[NetworkConfig]) -> String {
    let mut res = String::new();

    for cfg in networks {
        res.push_str("[Network]\n");

        let kvs = [
            cfg.name.clone().map(|v| ("# Name", v)),
            cfg.server.clone().map(|v| ("Server", v)),
            cfg.port.clone().map(|v| ("Port", v)),
            cfg.nick.clone().map(|v| ("Nick", v)),
            cfg.tls.clone().map(|v| ("Tls", v)),
            cfg.autoconnect.clone().map(|v| ("AutoConnect", v)),
        ];

        for (key, value) in kvs.into_iter().flatten() {
            res.push_str(key);
            res.push_str(" = ");
            res.push_str(value.as_str());
            res.push('\n');
        }
        res.push('\n');
    }

    res
}
