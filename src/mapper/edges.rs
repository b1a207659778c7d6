//! Edge services gateways (ESG)

use super::shared::{
    appliance_placement, global_configuration, route_redistribution, static_routes, syslog,
    DEFAULT_GATEWAY_FIELDS,
};
use super::{copy_fields, map_items, select_entry, Document};
use crate::error::SheetResult;
use crate::types::Tree;
use serde_json::Value;

const NAME_KEY: &str = "Edge Name";

/// Build one document per edge of the deploy sheet, joined by name with the
/// settings and routing sheets.
pub fn convert_edges(deploy: &[Tree], settings: &[Tree], routing: &[Tree]) -> SheetResult<Vec<Value>> {
    let empty = Tree::new();
    let mut out = Vec::with_capacity(deploy.len());

    for entry in deploy {
        let mut esg = deployment(entry)?;
        let name = entry.table("Name and description")?.field("Name")?;

        let s = select_entry(settings, name, NAME_KEY)?.unwrap_or(&empty);
        esg.insert("Syslog".to_string(), Value::Object(syslog(s)?));
        esg.insert("Interfaces".to_string(), Value::Array(interfaces(s)?));

        let r = select_entry(routing, name, NAME_KEY)?.unwrap_or(&empty);
        add_routing(&mut esg, r)?;

        out.push(Value::Object(esg));
    }

    Ok(out)
}

fn deployment(d: &Tree) -> SheetResult<Document> {
    let mut esg = Document::new();

    copy_fields(
        &mut esg,
        d.table("Name and description")?,
        &[
            ("Name", "Name"),
            ("Hostname", "Hostname"),
            ("EnableHighAvailability", "Enable High Availability"),
        ],
    )?;

    copy_fields(
        &mut esg,
        d.table("Settings")?,
        &[
            ("Password", "Password"),
            ("EnableSSHaccess", "Enable SSH access"),
            ("EnableFIPSmode", "Enable FIPS mode"),
            ("EnableAutoRuleGeneration", "Enable auto rule generation"),
            ("EdgeControlLevelLogging", "Edge Control Level Logging"),
        ],
    )?;

    let p = d.table("Configure deployment")?;
    copy_fields(&mut esg, p, &[("Datacenter", "Datacenter")])?;
    // "Extra Large" / "X-Large" → "extralarge" / "xlarge"
    let size: String = p
        .text("Appliance Size")?
        .chars()
        .filter(|c| *c != '-' && *c != ' ')
        .collect();
    esg.insert("ApplianceSize".to_string(), Value::from(size.to_lowercase()));
    appliance_placement(&mut esg, p, "NSX Edge Appliance")?;

    copy_fields(&mut esg, d.table("Default gateway settings")?, DEFAULT_GATEWAY_FIELDS)?;

    copy_fields(
        &mut esg,
        d.table("Firewall and HA")?,
        &[
            ("ConfigureFirewallDefaultPolicy", "Configure Firewall default policy"),
            ("DefaultTrafficPolicy", "Default Traffic Policy"),
            ("DefaultFirewallLogging", "Logging"),
            ("HAvNIC", "vNIC"),
            ("HADeclareDeadTime", "Declare Dead Time"),
            ("HAManagementIPs", "Management IPs"),
        ],
    )?;

    Ok(esg)
}

fn interfaces(settings: &Tree) -> SheetResult<Vec<Value>> {
    let nics = settings.table("Interfaces")?.list("vNIC")?;
    map_items(nics, None, |nic| {
        let mut interface = Document::new();
        copy_fields(
            &mut interface,
            nic,
            &[("Name", "Name"), ("Type", "Type"), ("ConnectedTo", "Connected To")],
        )?;

        let config = nic.table("Configure Subnets")?;
        copy_fields(
            &mut interface,
            config,
            &[
                ("PrimaryIPAddress", "PrimaryIP Address"),
                ("SecondaryIPAddress", "SecondaryIP Addresses"),
                ("SubnetPrefixLength", "Subnet Prefix Length"),
                ("MTU", "MTU"),
            ],
        )?;
        copy_fields(
            &mut interface,
            config.table("Options")?,
            &[
                ("EnableProxyARP", "Enable Proxy ARP"),
                ("SendICMPRedirect", "Send ICMP Redirect"),
                ("ReversePathFilter", "Reverse Path Filter"),
            ],
        )?;
        Ok(interface)
    })
}

fn add_routing(esg: &mut Document, d: &Tree) -> SheetResult<()> {
    esg.insert(
        "GlobalConfiguration".to_string(),
        Value::Object(global_configuration(d, true)?),
    );
    esg.insert("StaticRoute".to_string(), Value::Array(static_routes(d)?));

    let mut ospf = Document::new();
    copy_fields(
        &mut ospf,
        d.table("OSPF")?,
        &[
            ("Status", "Status"),
            ("GracefulRestart", "Graceful Restart"),
            ("DefaultOriginate", "Default Originate"),
        ],
    )?;
    esg.insert("Ospf".to_string(), Value::Object(ospf));

    let p = d.table("BGP")?;
    let mut bgp = Document::new();
    copy_fields(
        &mut bgp,
        p,
        &[
            ("Status", "Status"),
            ("LocalAS", "Local AS"),
            ("GracefulRestart", "Graceful Restart"),
            ("DefaultOriginate", "Default Originate"),
        ],
    )?;
    let neighbors = map_items(p.table("Neighbors")?.list("Neighbor")?, None, |n| {
        let mut neighbor = Document::new();
        copy_fields(
            &mut neighbor,
            n,
            &[
                ("IPAddress", "IP Address"),
                ("RemoteAS", "Remote AS"),
                ("RemovePrivateAS", "Remove Private AS"),
                ("Weight", "Weight"),
                ("KeepAliveTime", "Keep Alive Time"),
                ("HoldDownTime", "Hold Down Time"),
                ("Password", "Password"),
            ],
        )?;
        Ok(neighbor)
    })?;
    bgp.insert("Neighbors".to_string(), Value::Array(neighbors));
    esg.insert("Bgp".to_string(), Value::Object(bgp));

    esg.insert(
        "RouteRedistribution".to_string(),
        Value::Object(route_redistribution(d)?),
    );
    Ok(())
}
