//! Blocks that edges and routers lay out the same way

use super::{copy_fields, map_items, Document};
use crate::error::{SheetError, SheetResult};
use crate::types::Tree;
use serde_json::Value;

const DEFAULT_FOLDER: &str = "vm";

pub(crate) const DEFAULT_GATEWAY_FIELDS: &[(&str, &str)] = &[
    ("ConfigureDefaultGateway", "Configure Default Gateway"),
    ("GatewayvNIC", "vNIC"),
    ("GatewayIP", "Gateway IP"),
    ("GatewayMTU", "MTU"),
    ("GatewayAdminDistance", "Admin Distance"),
];

/// Placement of the first appliance; a second one adds an HA host and datastore.
///
/// An empty folder falls back to the default VM folder of the entry being built.
pub(crate) fn appliance_placement(doc: &mut Document, deployment: &Tree, list_label: &str) -> SheetResult<()> {
    let appliances = deployment.list(list_label)?;
    let first = appliances.first().ok_or_else(|| {
        SheetError::Layout(format!("'{}' lists no appliance", list_label))
    })?;

    copy_fields(
        doc,
        first,
        &[
            ("Cluster", "Cluster/Resource Pool"),
            ("Datastore", "Datastore"),
            ("Host", "Host"),
            ("Folder", "Folder"),
        ],
    )?;

    if !first.field("Folder")?.is_truthy() {
        doc.insert("Folder".to_string(), Value::from(DEFAULT_FOLDER));
    }

    if let Some(second) = appliances.get(1) {
        let hosts = vec![first.json("Host")?, second.json("Host")?];
        doc.insert("Host".to_string(), Value::Array(hosts));
        doc.insert("HADatastore".to_string(), second.json("Datastore")?);
    }

    Ok(())
}

/// `Syslog` document from a settings entry
pub(crate) fn syslog(settings: &Tree) -> SheetResult<Document> {
    let servers = settings
        .table("Configuration")?
        .table("Details")?
        .table("Syslog Servers")?;

    let mut doc = Document::new();
    let configured: Vec<Value> = ["Syslog Server 1", "Syslog Server 2"]
        .iter()
        .map(|label| servers.field(label))
        .collect::<SheetResult<Vec<_>>>()?
        .into_iter()
        .filter(|node| node.is_truthy())
        .map(|node| node.to_json())
        .collect();
    if !configured.is_empty() {
        doc.insert("SyslogServers".to_string(), Value::Array(configured));
    }
    doc.insert("Protocol".to_string(), servers.json("Protocol")?);

    Ok(doc)
}

/// `DefaultGateway` part of the global routing configuration
pub(crate) fn routing_default_gateway(global: &Tree, with_admin_distance: bool) -> SheetResult<Document> {
    let gateway = global.table("Default Gateway")?;
    let mut doc = Document::new();
    copy_fields(
        &mut doc,
        gateway,
        &[("vNIC", "vNIC"), ("GatewayIP", "Gateway IP"), ("MTU", "MTU")],
    )?;
    if with_admin_distance {
        copy_fields(&mut doc, gateway, &[("AdminDistance", "Admin Distance")])?;
    }
    Ok(doc)
}

pub(crate) fn global_configuration(routing: &Tree, with_admin_distance: bool) -> SheetResult<Document> {
    let global = routing.table("Global Configuration")?;
    let mut doc = Document::new();
    doc.insert(
        "RouterId".to_string(),
        global.table("Dynamic Routing Configuration")?.json("Router ID")?,
    );
    doc.insert("ECMP".to_string(), global.json("ECMP")?);
    doc.insert(
        "DefaultGateway".to_string(),
        Value::Object(routing_default_gateway(global, with_admin_distance)?),
    );
    Ok(doc)
}

pub(crate) fn static_routes(routing: &Tree) -> SheetResult<Vec<Value>> {
    let routes = routing.table("Static routes")?.list("route")?;
    map_items(routes, None, |route| {
        let mut doc = Document::new();
        copy_fields(&mut doc, route, &[("Network", "Network"), ("NextHop", "Next Hop")])?;
        Ok(doc)
    })
}

pub(crate) fn route_redistribution(routing: &Tree) -> SheetResult<Document> {
    let block = routing.table("Route Redistribution")?;
    let mut doc = Document::new();

    let prefixes = map_items(block.table("IP Prefixes")?.list("IP Prefix")?, None, |prefix| {
        let mut p = Document::new();
        copy_fields(&mut p, prefix, &[("Name", "Name"), ("IP/Network", "IP/Network")])?;
        Ok(p)
    })?;
    doc.insert("IPPrefixes".to_string(), Value::Array(prefixes));

    let criteria = block
        .table("Route Redistribution Table")?
        .list("Redistribution Criteria")?;
    let table = map_items(criteria, None, |rule| {
        let mut r = Document::new();
        copy_fields(
            &mut r,
            rule,
            &[("PrefixName", "Prefix Name"), ("LearnerProtocol", "Learner Protocol")],
        )?;

        let mut learning = Document::new();
        copy_fields(
            &mut learning,
            rule.table("Allow Learning from")?,
            &[
                ("OSPF", "OSPF"),
                ("BGP", "BGP"),
                ("StaticRoutes", "Static Routes"),
                ("Connected", "Connected"),
            ],
        )?;
        r.insert("AllowLearningFrom".to_string(), Value::Object(learning));
        copy_fields(&mut r, rule, &[("Action", "Action")])?;
        Ok(r)
    })?;
    doc.insert("RouteRedistributionTable".to_string(), Value::Array(table));

    Ok(doc)
}
