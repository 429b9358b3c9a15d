// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use tplink_router_status::{ActItem, ActType, RouterError, encode_acts, parse_response};

#[test]
fn test_encode_query_lists_act_types_in_order() {
    let acts = [
        ActItem::new(ActType::GetStack, "LAN_IP_INTF", &["IPInterfaceIPAddress"]),
        ActItem::new(ActType::Get, "LAN_HOST_CFG", &["DHCPServerEnable"]).with_stack("1,0,0,0,0,0"),
        ActItem::new(ActType::GetList, "LAN_HOST_ENTRY", &["MACAddress", "active"]),
    ];

    let (path, _) = encode_acts(&acts);

    assert_eq!(path, "cgi?6&1&5");
}

#[test]
fn test_encode_body_blocks() {
    let acts = [
        ActItem::new(ActType::Get, "LAN_HOST_CFG", &["DHCPServerEnable"]).with_stack("1,0,0,0,0,0"),
        ActItem::new(ActType::GetList, "LAN_HOST_ENTRY", &["MACAddress", "active"]),
    ];

    let (_, body) = encode_acts(&acts);

    assert_eq!(
        body,
        "[LAN_HOST_CFG#1,0,0,0,0,0#0,0,0,0,0,0]0,1\r\nDHCPServerEnable\r\n\
         [LAN_HOST_ENTRY#0,0,0,0,0,0#0,0,0,0,0,0]1,2\r\nMACAddress\r\nactive\r\n"
    );
}

#[test]
fn test_encode_act_without_attributes() {
    let (path, body) = encode_acts(&[ActItem::new(ActType::Cgi, "/cgi/logout", &[])]);
    assert_eq!(path, "cgi?8");
    assert_eq!(body, "[/cgi/logout#0,0,0,0,0,0#0,0,0,0,0,0]0,0\r\n");
}

#[test]
fn test_encode_empty_request() {
    let (path, body) = encode_acts(&[]);
    assert_eq!(path, "cgi?");
    assert!(body.is_empty());
}

#[test]
fn test_parse_groups_blocks_by_index() {
    let text = "[1,0,0,0,0,0]0\nIPInterfaceIPAddress=192.168.1.1\n\
                [1,0,0,0,0,0]1\nDHCPServerEnable=1\n\
                [1,0,0,0,0,0]2\nMACAddress=AA:BB:CC:DD:EE:01\nactive=1\n\
                [2,0,0,0,0,0]2\nMACAddress=AA:BB:CC:DD:EE:02\nactive=0\n\
                [error]0\n";

    let response = parse_response(text).unwrap();

    assert_eq!(response.blocks.len(), 4);
    assert_eq!(response.first(0).unwrap()["IPInterfaceIPAddress"], "192.168.1.1");
    assert_eq!(response.first(1).unwrap()["DHCPServerEnable"], "1");
    let hosts = response.list(2);
    assert_eq!(hosts.len(), 2);
    assert_eq!(hosts[0]["active"], "1");
    assert_eq!(hosts[1]["active"], "0");
    assert_eq!(response.blocks[3].stack, "2,0,0,0,0,0");
}

#[test]
fn test_parse_ignores_lines_after_trailer() {
    let response = parse_response("[0,0,0,0,0,0]0\na=1\n[error]0\nb=2\n").unwrap();
    let block = response.first(0).unwrap();
    assert_eq!(block.len(), 1);
    assert_eq!(block["a"], "1");
}

#[test]
fn test_parse_nonzero_error_is_protocol_error() {
    let err = parse_response("[0,0,0,0,0,0]0\na=1\n[error]9000\n").unwrap_err();
    assert!(matches!(err, RouterError::Protocol(_)));
    assert_eq!(err.to_string(), "Protocol error: Router returned error code 9000");
}

#[test]
fn test_parse_malformed_trailer() {
    let err = parse_response("[error]oops").unwrap_err();
    assert!(err.to_string().contains("Malformed error trailer"));
}
