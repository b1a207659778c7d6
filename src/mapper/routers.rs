//! Distributed logical routers (DLR)

use super::shared::{
    appliance_placement, global_configuration, route_redistribution, static_routes, syslog,
    DEFAULT_GATEWAY_FIELDS,
};
use super::{copy_fields, map_items, select_entry, Document};
use crate::error::SheetResult;
use crate::types::{Scalar, Tree};
use serde_json::Value;

const NAME_KEY: &str = "DLR Name";
const UNIVERSAL_INSTALL: &str = "Universal Logical (Distributed) Router";

/// Build one document per router of the deploy sheet, joined by name with
/// the settings, routing and bridging sheets.
pub fn convert_routers(
    deploy: &[Tree],
    settings: &[Tree],
    routing: &[Tree],
    bridging: &[Tree],
) -> SheetResult<Vec<Value>> {
    let empty = Tree::new();
    let mut out = Vec::with_capacity(deploy.len());

    for entry in deploy {
        let mut dlr = deployment(entry)?;
        let name = entry.table("Name and description")?.field("Name")?;

        let s = select_entry(settings, name, NAME_KEY)?.unwrap_or(&empty);
        dlr.insert("Syslog".to_string(), Value::Object(syslog(s)?));
        dlr.insert("Interfaces".to_string(), Value::Array(interfaces(s)?));

        let r = select_entry(routing, name, NAME_KEY)?.unwrap_or(&empty);
        add_routing(&mut dlr, r)?;

        let b = select_entry(bridging, name, NAME_KEY)?.unwrap_or(&empty);
        dlr.insert("Bridge".to_string(), Value::Array(bridges(b)?));

        out.push(Value::Object(dlr));
    }

    Ok(out)
}

fn deployment(d: &Tree) -> SheetResult<Document> {
    let mut dlr = Document::new();

    let p = d.table("Name and description")?;
    let universal = *p.scalar("Install Type")? == Scalar::from(UNIVERSAL_INSTALL);
    dlr.insert("Universal".to_string(), Value::Bool(universal));
    copy_fields(
        &mut dlr,
        p,
        &[
            ("LocalEgress", "Local Egress"),
            ("Name", "Name"),
            ("Hostname", "Hostname"),
            ("EnableHighAvailability", "Enable High Availability"),
        ],
    )?;

    copy_fields(
        &mut dlr,
        d.table("Settings")?,
        &[
            ("Password", "Password"),
            ("EnableSSHaccess", "Enable SSH access"),
            ("EnableFIPSmode", "Enable FIPS mode"),
            ("EdgeControlLevelLogging", "Edge Control Level Logging"),
        ],
    )?;

    let p = d.table("Configure deployment")?;
    copy_fields(&mut dlr, p, &[("Datacenter", "Datacenter")])?;
    appliance_placement(&mut dlr, p, "DLR Appliance")?;

    copy_fields(
        &mut dlr,
        d.table("Configure interfaces")?
            .table("HA Interface Configuration")?,
        &[
            ("ConnectedTo", "Connected To"),
            ("PrimaryIPAddress", "Primary IP Address"),
            ("SubnetPrefixLength", "Subnet Prefix Length"),
        ],
    )?;

    copy_fields(&mut dlr, d.table("Default gateway settings")?, DEFAULT_GATEWAY_FIELDS)?;

    Ok(dlr)
}

fn interfaces(settings: &Tree) -> SheetResult<Vec<Value>> {
    let nics = settings.table("Interfaces")?.list("vNIC")?;
    map_items(nics, Some("Name"), |nic| {
        let mut interface = Document::new();
        copy_fields(
            &mut interface,
            nic,
            &[("Name", "Name"), ("Type", "Type"), ("ConnectedTo", "Connected To")],
        )?;
        copy_fields(
            &mut interface,
            nic.table("Configure Subnets")?,
            &[
                ("PrimaryIPAddress", "PrimaryIP Address"),
                ("SubnetPrefixLength", "Subnet Prefix Length"),
                ("MTU", "MTU"),
            ],
        )?;
        Ok(interface)
    })
}

fn add_routing(dlr: &mut Document, d: &Tree) -> SheetResult<()> {
    dlr.insert(
        "GlobalConfiguration".to_string(),
        Value::Object(global_configuration(d, false)?),
    );
    dlr.insert("StaticRoute".to_string(), Value::Array(static_routes(d)?));

    let mut ospf = Document::new();
    copy_fields(
        &mut ospf,
        d.table("OSPF")?,
        &[
            ("Status", "Status"),
            ("ProtocolAddress", "Protocol Address"),
            ("ForwardingAddress", "Forwarding Address"),
            ("GracefulRestart", "Graceful Restart"),
        ],
    )?;
    dlr.insert("Ospf".to_string(), Value::Object(ospf));

    let p = d.table("BGP")?;
    let mut bgp = Document::new();
    copy_fields(
        &mut bgp,
        p,
        &[
            ("Status", "Status"),
            ("GracefulRestart", "Graceful Restart"),
            ("LocalAS", "Local AS"),
        ],
    )?;
    let neighbors = map_items(p.table("Neighbors")?.list("Neighbor")?, None, |n| {
        let mut neighbor = Document::new();
        copy_fields(
            &mut neighbor,
            n,
            &[
                ("Interface", "Interface"),
                ("IPAddress", "IP Address"),
                ("ForwardingAddress", "Forwarding Address"),
                ("ProtocolAddress", "Protocol Address"),
                ("RemoteAS", "Remote AS"),
                ("Weight", "Weight"),
                ("KeepAliveTime", "Keep Alive Time"),
                ("HoldDownTime", "Hold Down Time"),
                ("Password", "Password"),
            ],
        )?;
        Ok(neighbor)
    })?;
    bgp.insert("Neighbors".to_string(), Value::Array(neighbors));
    dlr.insert("Bgp".to_string(), Value::Object(bgp));

    dlr.insert(
        "RouteRedistribution".to_string(),
        Value::Object(route_redistribution(d)?),
    );
    Ok(())
}

fn bridges(bridging: &Tree) -> SheetResult<Vec<Value>> {
    let items = bridging.table("Bridges")?.list("Bridge")?;
    map_items(items, Some("Name"), |b| {
        let mut bridge = Document::new();
        copy_fields(
            &mut bridge,
            b,
            &[
                ("Name", "Name"),
                ("LogicalSwitch", "Logical Switch"),
                ("DistributedPortGroup", "Distributed Port Group"),
            ],
        )?;
        Ok(bridge)
    })
}
