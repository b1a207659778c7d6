//! Parameter workbook fixture shared by the integration tests
//!
//! Sheet layout: header row 4, labels from column B (one column per nesting
//! level, deepest F), G blank, defaults in H, entries from I.

#![allow(dead_code)]

use rust_xlsxwriter::Workbook as XlsxWorkbook;
use std::path::Path;

/// (nesting depth, label, values from the default column on)
type Row = (u16, &'static str, &'static [&'static str]);

const LABEL_COL: u16 = 1;
const DEFAULT_COL: u16 = 7;
const HEADER_ROW: u32 = 3;

fn write_sheet(
    wb: &mut XlsxWorkbook,
    name: &str,
    first_label: &str,
    header: &[&str],
    rows: &[Row],
) {
    let sheet = wb.add_worksheet();
    sheet.set_name(name).unwrap();

    sheet.write_string(HEADER_ROW, LABEL_COL, first_label).unwrap();
    for (i, text) in header.iter().enumerate() {
        if !text.is_empty() {
            sheet
                .write_string(HEADER_ROW, DEFAULT_COL + i as u16, *text)
                .unwrap();
        }
    }

    for (r, (depth, label, values)) in rows.iter().enumerate() {
        let row = HEADER_ROW + 1 + r as u32;
        sheet.write_string(row, LABEL_COL + depth, *label).unwrap();
        for (i, text) in values.iter().enumerate() {
            let col = DEFAULT_COL + i as u16;
            if text.is_empty() {
                continue;
            }
            match text.parse::<i64>() {
                Ok(n) => sheet.write_number(row, col, n as f64).unwrap(),
                Err(_) => sheet.write_string(row, col, *text).unwrap(),
            };
        }
    }
}

const LOGICAL_SWITCHES: &[Row] = &[
    (1, "Name *", &["", "ls-web", "ls-app"]),
    (1, "Description", &["", "web", "アプリ"]),
    (1, "Transport Zone", &["", "tz-global", "tz-global"]),
    (1, "Replication mode", &["Unicast", "Unicast", "Hybrid"]),
    (1, "Enable IP Discovery", &["■", "■", "■"]),
    (1, "Enable MAC Learning", &["□", "□", "■"]),
    (0, "Logical Switch #2", &[]),
    (1, "Name *", &[]),
    (1, "Description", &[]),
    (1, "Transport Zone", &[]),
    (1, "Replication mode", &["Unicast"]),
    (1, "Enable IP Discovery", &["■"]),
    (1, "Enable MAC Learning", &["□"]),
];

const EDGE_DEPLOY: &[Row] = &[
    (1, "Name *", &["", "esg-01", "esg-02"]),
    (1, "Hostname", &["", "esg-01.lab", "esg-02.lab"]),
    (1, "Enable High \nAvailability", &["□", "■", "□"]),
    (0, "Settings", &[]),
    (1, "User Name", &["admin", "admin", "admin"]),
    (1, "Password *", &["", "VMware1!VMware1!", "VMware1!VMware1!"]),
    (1, "Enable SSH access", &["□", "■", "■"]),
    (1, "Enable FIPS mode", &["□", "□", "□"]),
    (1, "Enable auto rule generation", &["■", "■", "■"]),
    (1, "Edge Control Level Logging", &["INFO", "INFO", "DEBUG"]),
    (0, "Configure deployment", &[]),
    (1, "Datacenter", &["", "dc-東京", "dc-東京"]),
    (1, "Appliance Size", &["Compact", "X-Large", "Large"]),
    (1, "NSX Edge Appliance #1", &[]),
    (2, "Cluster/Resource Pool", &["", "cl-edge", "cl-edge"]),
    (2, "Datastore", &["", "ds-01", "ds-01"]),
    (2, "Host", &["", "esx-01", "esx-03"]),
    (2, "Folder", &["(vm)", "edges", ""]),
    (1, "NSX Edge Appliance #2", &[]),
    (2, "Cluster/Resource Pool", &["", "cl-edge", ""]),
    (2, "Datastore", &["", "ds-02", ""]),
    (2, "Host", &["", "esx-02", ""]),
    (2, "Folder", &[]),
    (0, "Default gateway settings", &[]),
    (1, "Configure Default Gateway", &["■", "■", "□"]),
    (1, "vNIC", &["", "uplink", "-"]),
    (1, "Gateway IP", &["", "192.168.10.1", ""]),
    (1, "MTU", &["1500", "1500", "1500"]),
    (1, "Admin Distance", &["1", "1", "1"]),
    (0, "Firewall and HA", &[]),
    (1, "Configure Firewall default policy", &["■", "■", "■"]),
    (1, "Default Traffic Policy", &["Deny", "Accept", "Deny"]),
    (1, "Logging", &["□", "□", "■"]),
    (1, "vNIC", &["any", "any", "any"]),
    (1, "Declare Dead Time", &["15", "15", "15"]),
    (1, "Management IPs", &[]),
];

const EDGE_SETTINGS: &[Row] = &[
    (0, "Configuration", &[]),
    (1, "Details", &[]),
    (2, "Syslog Servers", &[]),
    (3, "Syslog Server 1", &["", "10.0.0.50", ""]),
    (3, "Syslog Server 2", &["", "10.0.0.51", ""]),
    (3, "Protocol", &["udp", "udp", "tcp"]),
    (0, "Interfaces", &[]),
    (1, "vNIC #0", &[]),
    (2, "Name", &["", "uplink", "uplink"]),
    (2, "Type", &["", "Uplink", "Uplink"]),
    (2, "Connected To", &["", "dvpg-ext", "dvpg-ext"]),
    (2, "Configure Subnets", &[]),
    (3, "PrimaryIP \nAddress *", &["", "192.168.10.2", "192.168.10.3"]),
    (3, "SecondaryIP Addresses", &[]),
    (3, "Subnet Prefix Length", &["24", "24", "24"]),
    (3, "MTU", &["1500", "1500", "1500"]),
    (3, "Options", &[]),
    (4, "Enable Proxy ARP", &["□", "□", "□"]),
    (4, "Send ICMP Redirect", &["■", "■", "■"]),
    (4, "Reverse Path Filter", &["Enabled", "Enabled", "Enabled"]),
];

const EDGE_ROUTING: &[Row] = &[
    (0, "Global Configuration", &[]),
    (1, "Dynamic Routing Configuration", &[]),
    (2, "Router ID", &["", "192.168.10.2", "192.168.10.3"]),
    (1, "ECMP", &["□", "■", "□"]),
    (1, "Default Gateway", &[]),
    (2, "vNIC", &["", "uplink", "uplink"]),
    (2, "Gateway IP", &["", "192.168.10.1", "192.168.10.1"]),
    (2, "MTU", &["1500", "1500", "1500"]),
    (2, "Admin Distance", &["1", "1", "1"]),
    (0, "Static routes", &[]),
    (1, "route #1", &[]),
    (2, "Network", &["", "10.1.0.0/16", ""]),
    (2, "Next Hop", &["", "192.168.10.254", ""]),
    (0, "OSPF", &[]),
    (1, "Status", &["□", "□", "□"]),
    (1, "Graceful Restart", &["■", "■", "■"]),
    (1, "Default Originate", &["□", "□", "□"]),
    (0, "BGP", &[]),
    (1, "Status", &["□", "■", "□"]),
    (1, "Local AS", &["", "65001", "65002"]),
    (1, "Graceful Restart", &["■", "■", "■"]),
    (1, "Default Originate", &["□", "□", "□"]),
    (1, "Neighbors", &[]),
    (2, "Neighbor #1", &[]),
    (3, "IP Address", &["", "192.168.10.1", ""]),
    (3, "Remote AS", &["", "65000", ""]),
    (3, "Remove Private AS", &["□", "□", "□"]),
    (3, "Weight", &["60", "60", "60"]),
    (3, "Keep Alive Time", &["60", "60", "60"]),
    (3, "Hold Down Time", &["180", "180", "180"]),
    (3, "Password", &[]),
    (0, "Route Redistribution", &[]),
    (1, "IP Prefixes", &[]),
    (2, "IP Prefix #1", &[]),
    (3, "Name", &["", "any", ""]),
    (3, "IP/Network", &["", "0.0.0.0/0", ""]),
    (1, "Route Redistribution Table", &[]),
    (2, "Redistribution Criteria #1", &[]),
    (3, "Prefix Name", &["", "any", ""]),
    (3, "Learner Protocol", &["", "BGP", ""]),
    (3, "Allow Learning from", &[]),
    (4, "OSPF", &["□", "□", "□"]),
    (4, "BGP", &["□", "□", "□"]),
    (4, "Static Routes", &["□", "■", "□"]),
    (4, "Connected", &["□", "■", "□"]),
    (3, "Action", &["Permit", "Permit", "Permit"]),
];

const DLR_DEPLOY: &[Row] = &[
    (1, "Install Type", &["", "Universal Logical (Distributed) Router"]),
    (1, "Local Egress", &["□", "■"]),
    (1, "Name *", &["", "dlr-01"]),
    (1, "Hostname", &["", "dlr-01.lab"]),
    (1, "Enable High Availability", &["□", "■"]),
    (0, "Settings", &[]),
    (1, "Password *", &["", "VMware1!VMware1!"]),
    (1, "Enable SSH access", &["□", "■"]),
    (1, "Enable FIPS mode", &["□", "□"]),
    (1, "Edge Control Level Logging", &["INFO", "INFO"]),
    (0, "Configure deployment", &[]),
    (1, "Datacenter", &["", "dc-01"]),
    (1, "DLR Appliance #1", &[]),
    (2, "Cluster/Resource Pool", &["", "cl-mgmt"]),
    (2, "Datastore", &["", "ds-01"]),
    (2, "Host", &["", "esx-11"]),
    (2, "Folder", &[]),
    (0, "Configure interfaces", &[]),
    (1, "HA Interface Configuration", &[]),
    (2, "Connected To", &["", "dvpg-ha"]),
    (2, "Primary IP Address", &["", "169.254.1.1"]),
    (2, "Subnet Prefix Length", &["", "30"]),
    (0, "Default gateway settings", &[]),
    (1, "Configure Default Gateway", &["■", "■"]),
    (1, "vNIC", &[]),
    (1, "Gateway IP", &["", "172.16.0.1"]),
    (1, "MTU", &["1500", "1500"]),
    (1, "Admin Distance", &["1", "1"]),
];

const DLR_SETTINGS: &[Row] = &[
    (0, "Configuration", &[]),
    (1, "Details", &[]),
    (2, "Syslog Servers", &[]),
    (3, "Syslog Server 1", &["", "10.0.0.50", ""]),
    (3, "Syslog Server 2", &[]),
    (3, "Protocol", &["udp", "udp", ""]),
    (0, "Interfaces", &[]),
    (1, "vNIC #1", &[]),
    (2, "Name", &["", "transit", "web"]),
    (2, "Type", &["", "Uplink", "Internal"]),
    (2, "Connected To", &["", "ls-transit", "ls-web"]),
    (2, "Configure Subnets", &[]),
    (3, "PrimaryIP Address", &["", "172.16.0.2", "10.10.0.1"]),
    (3, "Subnet Prefix Length", &["", "29", "24"]),
    (3, "MTU", &["1500", "1500", "1500"]),
    (1, "vNIC #2", &[]),
    (2, "Name", &[]),
];

const DLR_ROUTING: &[Row] = &[
    (0, "Global Configuration", &[]),
    (1, "Dynamic Routing Configuration", &[]),
    (2, "Router ID", &["", "172.16.0.2"]),
    (1, "ECMP", &["□", "□"]),
    (1, "Default Gateway", &[]),
    (2, "vNIC", &["", "transit"]),
    (2, "Gateway IP", &["", "172.16.0.1"]),
    (2, "MTU", &["1500", "1500"]),
    (0, "Static routes", &[]),
    (1, "route #1", &[]),
    (2, "Network", &[]),
    (2, "Next Hop", &[]),
    (0, "OSPF", &[]),
    (1, "Status", &["□", "■"]),
    (1, "Protocol Address", &["", "172.16.0.3"]),
    (1, "Forwarding Address", &["", "172.16.0.2"]),
    (1, "Graceful Restart", &["■", "■"]),
    (0, "BGP", &[]),
    (1, "Status", &["□", "□"]),
    (1, "Graceful Restart", &["■", "■"]),
    (1, "Local AS", &[]),
    (1, "Neighbors", &[]),
    (2, "Neighbor #1", &[]),
    (3, "Interface", &[]),
    (3, "IP Address", &[]),
    (3, "Forwarding Address", &[]),
    (3, "Protocol Address", &[]),
    (3, "Remote AS", &[]),
    (3, "Weight", &["60", "60"]),
    (3, "Keep Alive Time", &["60", "60"]),
    (3, "Hold Down Time", &["180", "180"]),
    (3, "Password", &[]),
    (0, "Route Redistribution", &[]),
    (1, "IP Prefixes", &[]),
    (2, "IP Prefix #1", &[]),
    (3, "Name", &[]),
    (3, "IP/Network", &[]),
    (1, "Route Redistribution Table", &[]),
    (2, "Redistribution Criteria #1", &[]),
    (3, "Prefix Name", &[]),
    (3, "Learner Protocol", &["", "OSPF"]),
    (3, "Allow Learning from", &[]),
    (4, "OSPF", &["□", "□"]),
    (4, "BGP", &["□", "□"]),
    (4, "Static Routes", &["□", "□"]),
    (4, "Connected", &["□", "■"]),
    (3, "Action", &["Permit", "Permit"]),
];

const DLR_BRIDGING: &[Row] = &[
    (0, "Bridges", &[]),
    (1, "Bridge #1", &[]),
    (2, "Name", &["", "br-01", "br-02"]),
    (2, "Logical Switch", &["", "ls-web", "ls-app"]),
    (2, "Distributed Port Group", &["", "pg-web", "pg-app"]),
];

/// Write a complete parameter workbook with two edges and one router
pub fn write_parameter_workbook(path: &Path) {
    let mut wb = XlsxWorkbook::new();

    write_sheet(
        &mut wb,
        "Logical Switches",
        "Logical Switch #1",
        &["既定値", "ls", "", "備考"],
        LOGICAL_SWITCHES,
    );
    write_sheet(
        &mut wb,
        "NSX Edge Deploy",
        "Name and description",
        &["既定値", "esg-01", "esg-02", "備考"],
        EDGE_DEPLOY,
    );
    write_sheet(
        &mut wb,
        "NSX Edge Settings",
        "Edge Name",
        &["既定値", "esg-01", "esg-02", "備考"],
        EDGE_SETTINGS,
    );
    write_sheet(
        &mut wb,
        "NSX Edge Routing",
        "Edge Name",
        &["既定値", "esg-01", "esg-02", "備考"],
        EDGE_ROUTING,
    );
    write_sheet(
        &mut wb,
        "DLR Deploy",
        "Name and description",
        &["既定値", "dlr-01", "備考"],
        DLR_DEPLOY,
    );
    write_sheet(
        &mut wb,
        "DLR Settings",
        "DLR Name",
        &["既定値", "dlr-01", "", "備考"],
        DLR_SETTINGS,
    );
    write_sheet(
        &mut wb,
        "DLR Routing",
        "DLR Name",
        &["既定値", "dlr-01", "備考"],
        DLR_ROUTING,
    );
    write_sheet(
        &mut wb,
        "DLR Bridding",
        "DLR Name",
        &["既定値", "dlr-01", "", "備考"],
        DLR_BRIDGING,
    );

    wb.save(path).unwrap();
}
