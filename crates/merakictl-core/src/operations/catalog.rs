//! Dashboard API v1 operation catalog

dashboard_operations! {
    "devices" {
        /// Return a single device
        get_device: GET "/devices/{serial}" (serial);
        /// Update the attributes of a device
        update_device: PUT "/devices/{serial}" (serial);
        /// Blink the LEDs on a device
        blink_device_leds: POST "/devices/{serial}/blinkLeds" (serial);
        /// Return the SIM and APN configurations for a cellular device
        get_device_cellular_sims: GET "/devices/{serial}/cellular/sims" (serial);
        /// Updates the SIM and APN configurations for a cellular device
        update_device_cellular_sims: PUT "/devices/{serial}/cellular/sims" (serial);
        /// List the clients of a device, up to a maximum of a month ago
        get_device_clients: GET "/devices/{serial}/clients" (serial);
        /// Enqueue a job to perform an ARP table request for the device
        create_device_live_tools_arp_table: POST "/devices/{serial}/liveTools/arpTable" (serial);
        /// Return an ARP table live tool job
        get_device_live_tools_arp_table: GET "/devices/{serial}/liveTools/arpTable/{arpTableId}" (serial, arp_table_id);
        /// Enqueue a job to perform a cable test for the device on the specified ports
        create_device_live_tools_cable_test: POST "/devices/{serial}/liveTools/cableTest" (serial, ports: Vec<String>);
        /// Return a cable test live tool job
        get_device_live_tools_cable_test: GET "/devices/{serial}/liveTools/cableTest/{id}" (serial, id);
        /// Enqueue a job to request the MAC table from the device
        create_device_live_tools_mac_table: POST "/devices/{serial}/liveTools/macTable" (serial);
        /// Return a MAC table live tool job
        get_device_live_tools_mac_table: GET "/devices/{serial}/liveTools/macTable/{macTableId}" (serial, mac_table_id);
        /// Enqueue a job to ping a target host from the device
        create_device_live_tools_ping: POST "/devices/{serial}/liveTools/ping" (serial, target);
        /// Return a ping job
        get_device_live_tools_ping: GET "/devices/{serial}/liveTools/ping/{id}" (serial, id);
        /// Enqueue a job to check connectivity status to the device
        create_device_live_tools_ping_device: POST "/devices/{serial}/liveTools/pingDevice" (serial);
        /// Return a ping device job
        get_device_live_tools_ping_device: GET "/devices/{serial}/liveTools/pingDevice/{id}" (serial, id);
        /// Enqueue a job to test a device throughput
        create_device_live_tools_throughput_test: POST "/devices/{serial}/liveTools/throughputTest" (serial);
        /// Return a throughput test job
        get_device_live_tools_throughput_test: GET "/devices/{serial}/liveTools/throughputTest/{throughputTestId}" (serial, throughput_test_id);
        /// Enqueue a job to send a Wake-on-LAN packet from the device
        create_device_live_tools_wake_on_lan: POST "/devices/{serial}/liveTools/wakeOnLan" (serial, vlan_id: i64, mac);
        /// Return a Wake-on-LAN job
        get_device_live_tools_wake_on_lan: GET "/devices/{serial}/liveTools/wakeOnLan/{wakeOnLanId}" (serial, wake_on_lan_id);
        /// List LLDP and CDP information for a device
        get_device_lldp_cdp: GET "/devices/{serial}/lldpCdp" (serial);
        /// Get the uplink loss percentage and latency in milliseconds for a wired network device
        get_device_loss_and_latency_history: GET "/devices/{serial}/lossAndLatencyHistory" (serial, ip);
        /// Return the management interface settings for a device
        get_device_management_interface: GET "/devices/{serial}/managementInterface" (serial);
        /// Update the management interface settings for a device
        update_device_management_interface: PUT "/devices/{serial}/managementInterface" (serial);
        /// Reboot a device
        reboot_device: POST "/devices/{serial}/reboot" (serial);
    }

    "networks" {
        /// Return a network
        get_network: GET "/networks/{networkId}" (network_id);
        /// Update a network
        update_network: PUT "/networks/{networkId}" (network_id);
        /// Delete a network
        delete_network: DELETE "/networks/{networkId}" (network_id);
        /// Return the alert history for this network
        get_network_alerts_history: GET "/networks/{networkId}/alerts/history" (network_id) paged(Next);
        /// Return the alert configuration for this network
        get_network_alerts_settings: GET "/networks/{networkId}/alerts/settings" (network_id);
        /// Update the alert configuration for this network
        update_network_alerts_settings: PUT "/networks/{networkId}/alerts/settings" (network_id);
        /// Bind a network to a template
        bind_network: POST "/networks/{networkId}/bind" (network_id, config_template_id);
        /// List the Bluetooth clients seen by APs in this network
        get_network_bluetooth_clients: GET "/networks/{networkId}/bluetoothClients" (network_id) paged(Next);
        /// Return a Bluetooth client
        get_network_bluetooth_client: GET "/networks/{networkId}/bluetoothClients/{bluetoothClientId}" (network_id, bluetooth_client_id);
        /// List the clients that have used this network in the timespan
        get_network_clients: GET "/networks/{networkId}/clients" (network_id) paged(Next);
        /// Return the application usage data for clients
        get_network_clients_application_usage: GET "/networks/{networkId}/clients/applicationUsage" (network_id, clients) paged(Next);
        /// Returns a timeseries of total traffic consumption rates for all clients on a network
        get_network_clients_bandwidth_usage_history: GET "/networks/{networkId}/clients/bandwidthUsageHistory" (network_id) paged(Next);
        /// Return overview statistics for network clients
        get_network_clients_overview: GET "/networks/{networkId}/clients/overview" (network_id);
        /// Provisions a client with a name and policy
        provision_network_clients: POST "/networks/{networkId}/clients/provision" (network_id, clients: serde_json::Value, device_policy);
        /// Return the usage histories for clients
        get_network_clients_usage_histories: GET "/networks/{networkId}/clients/usageHistories" (network_id, clients) paged(Next);
        /// Return the client associated with the given identifier
        get_network_client: GET "/networks/{networkId}/clients/{clientId}" (network_id, client_id);
        /// Return the policy assigned to the client on the network
        get_network_client_policy: GET "/networks/{networkId}/clients/{clientId}/policy" (network_id, client_id);
        /// Update the policy assigned to the client on the network
        update_network_client_policy: PUT "/networks/{networkId}/clients/{clientId}/policy" (network_id, client_id, device_policy);
        /// Return the splash authorization for a client, for each SSID they've associated with through splash
        get_network_client_splash_authorization_status: GET "/networks/{networkId}/clients/{clientId}/splashAuthorizationStatus" (network_id, client_id);
        /// Update a client's splash authorization
        update_network_client_splash_authorization_status: PUT "/networks/{networkId}/clients/{clientId}/splashAuthorizationStatus" (network_id, client_id, ssids: serde_json::Value);
        /// Return the client's network traffic data over time
        get_network_client_traffic_history: GET "/networks/{networkId}/clients/{clientId}/trafficHistory" (network_id, client_id) paged(Next);
        /// Return the client's daily usage history
        get_network_client_usage_history: GET "/networks/{networkId}/clients/{clientId}/usageHistory" (network_id, client_id);
        /// List the devices in a network
        get_network_devices: GET "/networks/{networkId}/devices" (network_id);
        /// Claim devices into a network
        claim_network_devices: POST "/networks/{networkId}/devices/claim" (network_id, serials: Vec<String>);
        /// Remove a single device
        remove_network_devices: POST "/networks/{networkId}/devices/remove" (network_id, serial);
        /// List the events for the network
        get_network_events: GET "/networks/{networkId}/events" (network_id) paged(Prev);
        /// List the event type to human-readable description
        get_network_events_event_types: GET "/networks/{networkId}/events/eventTypes" (network_id);
        /// Get firmware upgrade information for a network
        get_network_firmware_upgrades: GET "/networks/{networkId}/firmwareUpgrades" (network_id);
        /// Update firmware upgrade information for a network
        update_network_firmware_upgrades: PUT "/networks/{networkId}/firmwareUpgrades" (network_id);
        /// Rollback a firmware upgrade for a network
        create_network_firmware_upgrades_rollback: POST "/networks/{networkId}/firmwareUpgrades/rollbacks" (network_id, reasons: serde_json::Value);
        /// Get the staged upgrade event from a network
        get_network_firmware_upgrades_staged_events: GET "/networks/{networkId}/firmwareUpgrades/staged/events" (network_id);
        /// Create a staged upgrade event for a network
        create_network_firmware_upgrades_staged_event: POST "/networks/{networkId}/firmwareUpgrades/staged/events" (network_id, stages: serde_json::Value);
        /// Update the staged upgrade event for a network
        update_network_firmware_upgrades_staged_events: PUT "/networks/{networkId}/firmwareUpgrades/staged/events" (network_id, stages: serde_json::Value);
        /// Postpone by 1 week all pending staged upgrade stages for a network
        defer_network_firmware_upgrades_staged_events: POST "/networks/{networkId}/firmwareUpgrades/staged/events/defer" (network_id);
        /// Rollback a staged upgrade event for a network
        rollbacks_network_firmware_upgrades_staged_events: POST "/networks/{networkId}/firmwareUpgrades/staged/events/rollbacks" (network_id);
        /// List of staged upgrade groups in a network
        get_network_firmware_upgrades_staged_groups: GET "/networks/{networkId}/firmwareUpgrades/staged/groups" (network_id);
        /// Create a staged upgrade group for a network
        create_network_firmware_upgrades_staged_group: POST "/networks/{networkId}/firmwareUpgrades/staged/groups" (network_id, name, is_default: bool);
        /// Get a staged upgrade group from a network
        get_network_firmware_upgrades_staged_group: GET "/networks/{networkId}/firmwareUpgrades/staged/groups/{groupId}" (network_id, group_id);
        /// Update a staged upgrade group for a network
        update_network_firmware_upgrades_staged_group: PUT "/networks/{networkId}/firmwareUpgrades/staged/groups/{groupId}" (network_id, group_id, name, is_default: bool);
        /// Delete a staged upgrade group
        delete_network_firmware_upgrades_staged_group: DELETE "/networks/{networkId}/firmwareUpgrades/staged/groups/{groupId}" (network_id, group_id);
        /// Order of staged upgrade groups in a network
        get_network_firmware_upgrades_staged_stages: GET "/networks/{networkId}/firmwareUpgrades/staged/stages" (network_id);
        /// Assign staged upgrade groups to stages in a network
        update_network_firmware_upgrades_staged_stages: PUT "/networks/{networkId}/firmwareUpgrades/staged/stages" (network_id);
        /// List the floor plans that belong to your network
        get_network_floor_plans: GET "/networks/{networkId}/floorPlans" (network_id);
        /// Upload a floor plan
        create_network_floor_plan: POST "/networks/{networkId}/floorPlans" (network_id, name, image_contents);
        /// Find a floor plan by ID
        get_network_floor_plan: GET "/networks/{networkId}/floorPlans/{floorPlanId}" (network_id, floor_plan_id);
        /// Update a floor plan's geolocation and other meta data
        update_network_floor_plan: PUT "/networks/{networkId}/floorPlans/{floorPlanId}" (network_id, floor_plan_id);
        /// Destroy a floor plan
        delete_network_floor_plan: DELETE "/networks/{networkId}/floorPlans/{floorPlanId}" (network_id, floor_plan_id);
        /// List the group policies in a network
        get_network_group_policies: GET "/networks/{networkId}/groupPolicies" (network_id);
        /// Create a group policy
        create_network_group_policy: POST "/networks/{networkId}/groupPolicies" (network_id, name);
        /// Display a group policy
        get_network_group_policy: GET "/networks/{networkId}/groupPolicies/{groupPolicyId}" (network_id, group_policy_id);
        /// Update a group policy
        update_network_group_policy: PUT "/networks/{networkId}/groupPolicies/{groupPolicyId}" (network_id, group_policy_id);
        /// Delete a group policy
        delete_network_group_policy: DELETE "/networks/{networkId}/groupPolicies/{groupPolicyId}" (network_id, group_policy_id);
        /// Get each alert on the network
        get_network_health_alerts: GET "/networks/{networkId}/health/alerts" (network_id);
        /// List the authorized users configured under Meraki Authentication for a network
        get_network_meraki_auth_users: GET "/networks/{networkId}/merakiAuthUsers" (network_id);
        /// Authorize a user configured with Meraki Authentication for a network
        create_network_meraki_auth_user: POST "/networks/{networkId}/merakiAuthUsers" (network_id, email, authorizations: serde_json::Value);
        /// Return the Meraki Auth splash guest, RADIUS, or client VPN user
        get_network_meraki_auth_user: GET "/networks/{networkId}/merakiAuthUsers/{merakiAuthUserId}" (network_id, meraki_auth_user_id);
        /// Update a user configured with Meraki Authentication
        update_network_meraki_auth_user: PUT "/networks/{networkId}/merakiAuthUsers/{merakiAuthUserId}" (network_id, meraki_auth_user_id);
        /// Delete a user configured with Meraki Authentication
        delete_network_meraki_auth_user: DELETE "/networks/{networkId}/merakiAuthUsers/{merakiAuthUserId}" (network_id, meraki_auth_user_id);
        /// List the MQTT brokers for this network
        get_network_mqtt_brokers: GET "/networks/{networkId}/mqttBrokers" (network_id);
        /// Add an MQTT broker
        create_network_mqtt_broker: POST "/networks/{networkId}/mqttBrokers" (network_id, name, host, port: i64);
        /// Return an MQTT broker
        get_network_mqtt_broker: GET "/networks/{networkId}/mqttBrokers/{mqttBrokerId}" (network_id, mqtt_broker_id);
        /// Update an MQTT broker
        update_network_mqtt_broker: PUT "/networks/{networkId}/mqttBrokers/{mqttBrokerId}" (network_id, mqtt_broker_id);
        /// Delete an MQTT broker
        delete_network_mqtt_broker: DELETE "/networks/{networkId}/mqttBrokers/{mqttBrokerId}" (network_id, mqtt_broker_id);
        /// Return the NetFlow traffic reporting settings for a network
        get_network_netflow: GET "/networks/{networkId}/netflow" (network_id);
        /// Update the NetFlow traffic reporting settings for a network
        update_network_netflow: PUT "/networks/{networkId}/netflow" (network_id);
        /// Get the channel utilization over each radio for all APs in a network
        get_network_network_health_channel_utilization: GET "/networks/{networkId}/networkHealth/channelUtilization" (network_id) paged(Next);
        /// List the keys required to access Personally Identifiable Information (PII) for a given identifier
        get_network_pii_pii_keys: GET "/networks/{networkId}/pii/piiKeys" (network_id);
        /// List the PII requests for this network or organization
        get_network_pii_requests: GET "/networks/{networkId}/pii/requests" (network_id);
        /// Submit a new delete or restrict processing PII request
        create_network_pii_request: POST "/networks/{networkId}/pii/requests" (network_id);
        /// Return a PII request
        get_network_pii_request: GET "/networks/{networkId}/pii/requests/{requestId}" (network_id, request_id);
        /// Delete a restrict processing PII request
        delete_network_pii_request: DELETE "/networks/{networkId}/pii/requests/{requestId}" (network_id, request_id);
        /// Given a piece of PII, return the Systems Manager device ID(s) associated with that identifier
        get_network_pii_sm_devices_for_key: GET "/networks/{networkId}/pii/smDevicesForKey" (network_id);
        /// Given a piece of PII, return the Systems Manager owner ID(s) associated with that identifier
        get_network_pii_sm_owners_for_key: GET "/networks/{networkId}/pii/smOwnersForKey" (network_id);
        /// Get policies for all clients with policies
        get_network_policies_by_client: GET "/networks/{networkId}/policies/byClient" (network_id) paged(Next);
        /// Return the settings for a network
        get_network_settings: GET "/networks/{networkId}/settings" (network_id);
        /// Update the settings for a network
        update_network_settings: PUT "/networks/{networkId}/settings" (network_id);
        /// Return the SNMP settings for a network
        get_network_snmp: GET "/networks/{networkId}/snmp" (network_id);
        /// Update the SNMP settings for a network
        update_network_snmp: PUT "/networks/{networkId}/snmp" (network_id);
        /// List the splash login attempts for a network
        get_network_splash_login_attempts: GET "/networks/{networkId}/splashLoginAttempts" (network_id);
        /// Split a combined network into individual networks for each type of device
        split_network: POST "/networks/{networkId}/split" (network_id);
        /// List the syslog servers for a network
        get_network_syslog_servers: GET "/networks/{networkId}/syslogServers" (network_id);
        /// Update the syslog servers for a network
        update_network_syslog_servers: PUT "/networks/{networkId}/syslogServers" (network_id, servers: serde_json::Value);
        /// List the LLDP and CDP information for all discovered devices and connections in a network
        get_network_topology_link_layer: GET "/networks/{networkId}/topology/linkLayer" (network_id);
        /// Return the traffic analysis data for this network
        get_network_traffic: GET "/networks/{networkId}/traffic" (network_id);
        /// Return the traffic analysis settings for a network
        get_network_traffic_analysis: GET "/networks/{networkId}/trafficAnalysis" (network_id);
        /// Update the traffic analysis settings for a network
        update_network_traffic_analysis: PUT "/networks/{networkId}/trafficAnalysis" (network_id);
        /// Returns the application categories for traffic shaping rules
        get_network_traffic_shaping_application_categories: GET "/networks/{networkId}/trafficShaping/applicationCategories" (network_id);
        /// Returns the available DSCP tagging options for your traffic shaping rules
        get_network_traffic_shaping_dscp_tagging_options: GET "/networks/{networkId}/trafficShaping/dscpTaggingOptions" (network_id);
        /// Unbind a network from a template
        unbind_network: POST "/networks/{networkId}/unbind" (network_id);
        /// List VLAN profiles for a network
        get_network_vlan_profiles: GET "/networks/{networkId}/vlanProfiles" (network_id);
        /// Create a VLAN profile for a network
        create_network_vlan_profile: POST "/networks/{networkId}/vlanProfiles" (network_id, name, vlan_names: serde_json::Value, vlan_groups: serde_json::Value, iname);
        /// Get the assigned VLAN profiles for devices in a network
        get_network_vlan_profiles_assignments_by_device: GET "/networks/{networkId}/vlanProfiles/assignments/byDevice" (network_id) paged(Next);
        /// Update the assigned VLAN profile for devices in a network
        reassign_network_vlan_profiles_assignments: POST "/networks/{networkId}/vlanProfiles/assignments/reassign" (network_id, serials: Vec<String>, vlan_profile: serde_json::Value);
        /// Get an existing VLAN profile of a network
        get_network_vlan_profile: GET "/networks/{networkId}/vlanProfiles/{iname}" (network_id, iname);
        /// Update an existing VLAN profile of a network
        update_network_vlan_profile: PUT "/networks/{networkId}/vlanProfiles/{iname}" (network_id, iname, name, vlan_names: serde_json::Value, vlan_groups: serde_json::Value);
        /// Delete a VLAN profile of a network
        delete_network_vlan_profile: DELETE "/networks/{networkId}/vlanProfiles/{iname}" (network_id, iname);
        /// List the HTTP servers for a network
        get_network_webhooks_http_servers: GET "/networks/{networkId}/webhooks/httpServers" (network_id);
        /// Add an HTTP server to a network
        create_network_webhooks_http_server: POST "/networks/{networkId}/webhooks/httpServers" (network_id, name, url);
        /// Return an HTTP server for a network
        get_network_webhooks_http_server: GET "/networks/{networkId}/webhooks/httpServers/{httpServerId}" (network_id, http_server_id);
        /// Update an HTTP server
        update_network_webhooks_http_server: PUT "/networks/{networkId}/webhooks/httpServers/{httpServerId}" (network_id, http_server_id);
        /// Delete an HTTP server from a network
        delete_network_webhooks_http_server: DELETE "/networks/{networkId}/webhooks/httpServers/{httpServerId}" (network_id, http_server_id);
        /// List the webhook payload templates for a network
        get_network_webhooks_payload_templates: GET "/networks/{networkId}/webhooks/payloadTemplates" (network_id);
        /// Create a webhook payload template for a network
        create_network_webhooks_payload_template: POST "/networks/{networkId}/webhooks/payloadTemplates" (network_id, name);
        /// Get the webhook payload template for a network
        get_network_webhooks_payload_template: GET "/networks/{networkId}/webhooks/payloadTemplates/{payloadTemplateId}" (network_id, payload_template_id);
        /// Update a webhook payload template for a network
        update_network_webhooks_payload_template: PUT "/networks/{networkId}/webhooks/payloadTemplates/{payloadTemplateId}" (network_id, payload_template_id);
        /// Destroy a webhook payload template for a network
        delete_network_webhooks_payload_template: DELETE "/networks/{networkId}/webhooks/payloadTemplates/{payloadTemplateId}" (network_id, payload_template_id);
        /// Send a test webhook for a network
        create_network_webhooks_webhook_test: POST "/networks/{networkId}/webhooks/webhookTests" (network_id, url);
        /// Return the status of a webhook test for a network
        get_network_webhooks_webhook_test: GET "/networks/{networkId}/webhooks/webhookTests/{webhookTestId}" (network_id, webhook_test_id);
    }

    "organizations" {
        /// List the organizations that the user has privileges on
        get_organizations: GET "/organizations" () paged(Next);
        /// Create a new organization
        create_organization: POST "/organizations" (name);
        /// Return an organization
        get_organization: GET "/organizations/{organizationId}" (organization_id);
        /// Update an organization
        update_organization: PUT "/organizations/{organizationId}" (organization_id);
        /// Delete an organization
        delete_organization: DELETE "/organizations/{organizationId}" (organization_id);
        /// Return the list of action batches in the organization
        get_organization_action_batches: GET "/organizations/{organizationId}/actionBatches" (organization_id);
        /// Create an action batch
        create_organization_action_batch: POST "/organizations/{organizationId}/actionBatches" (organization_id, actions: serde_json::Value);
        /// Return an action batch
        get_organization_action_batch: GET "/organizations/{organizationId}/actionBatches/{actionBatchId}" (organization_id, action_batch_id);
        /// Update an action batch
        update_organization_action_batch: PUT "/organizations/{organizationId}/actionBatches/{actionBatchId}" (organization_id, action_batch_id);
        /// Delete an action batch
        delete_organization_action_batch: DELETE "/organizations/{organizationId}/actionBatches/{actionBatchId}" (organization_id, action_batch_id);
        /// List adaptive policy ACLs in a organization
        get_organization_adaptive_policy_acls: GET "/organizations/{organizationId}/adaptivePolicy/acls" (organization_id);
        /// Creates new adaptive policy ACL
        create_organization_adaptive_policy_acl: POST "/organizations/{organizationId}/adaptivePolicy/acls" (organization_id, name, rules: serde_json::Value, ip_version);
        /// Returns the adaptive policy ACL information
        get_organization_adaptive_policy_acl: GET "/organizations/{organizationId}/adaptivePolicy/acls/{aclId}" (organization_id, acl_id);
        /// Updates an adaptive policy ACL
        update_organization_adaptive_policy_acl: PUT "/organizations/{organizationId}/adaptivePolicy/acls/{aclId}" (organization_id, acl_id);
        /// Deletes the specified adaptive policy ACL
        delete_organization_adaptive_policy_acl: DELETE "/organizations/{organizationId}/adaptivePolicy/acls/{aclId}" (organization_id, acl_id);
        /// List adaptive policy groups in a organization
        get_organization_adaptive_policy_groups: GET "/organizations/{organizationId}/adaptivePolicy/groups" (organization_id);
        /// Creates a new adaptive policy group
        create_organization_adaptive_policy_group: POST "/organizations/{organizationId}/adaptivePolicy/groups" (organization_id, name, sgt: i64);
        /// Returns an adaptive policy group
        get_organization_adaptive_policy_group: GET "/organizations/{organizationId}/adaptivePolicy/groups/{id}" (organization_id, id);
        /// Updates an adaptive policy group
        update_organization_adaptive_policy_group: PUT "/organizations/{organizationId}/adaptivePolicy/groups/{id}" (organization_id, id);
        /// Deletes the specified adaptive policy group and any associated policies and references
        delete_organization_adaptive_policy_group: DELETE "/organizations/{organizationId}/adaptivePolicy/groups/{id}" (organization_id, id);
        /// Returns adaptive policy aggregate statistics for an organization
        get_organization_adaptive_policy_overview: GET "/organizations/{organizationId}/adaptivePolicy/overview" (organization_id);
        /// List adaptive policies in an organization
        get_organization_adaptive_policy_policies: GET "/organizations/{organizationId}/adaptivePolicy/policies" (organization_id);
        /// Add an adaptive policy
        create_organization_adaptive_policy_policy: POST "/organizations/{organizationId}/adaptivePolicy/policies" (organization_id, source_group: serde_json::Value, destination_group: serde_json::Value);
        /// Return an adaptive policy
        get_organization_adaptive_policy_policy: GET "/organizations/{organizationId}/adaptivePolicy/policies/{id}" (organization_id, id);
        /// Update an adaptive policy
        update_organization_adaptive_policy_policy: PUT "/organizations/{organizationId}/adaptivePolicy/policies/{id}" (organization_id, id);
        /// Delete an adaptive policy
        delete_organization_adaptive_policy_policy: DELETE "/organizations/{organizationId}/adaptivePolicy/policies/{id}" (organization_id, id);
        /// Returns global adaptive policy settings in an organization
        get_organization_adaptive_policy_settings: GET "/organizations/{organizationId}/adaptivePolicy/settings" (organization_id);
        /// Update global adaptive policy settings
        update_organization_adaptive_policy_settings: PUT "/organizations/{organizationId}/adaptivePolicy/settings" (organization_id);
        /// List the dashboard administrators in this organization
        get_organization_admins: GET "/organizations/{organizationId}/admins" (organization_id);
        /// Create a new dashboard administrator
        create_organization_admin: POST "/organizations/{organizationId}/admins" (organization_id, email, name, org_access);
        /// Update an administrator
        update_organization_admin: PUT "/organizations/{organizationId}/admins/{adminId}" (organization_id, admin_id);
        /// Revoke all access for a dashboard administrator within this organization
        delete_organization_admin: DELETE "/organizations/{organizationId}/admins/{adminId}" (organization_id, admin_id);
        /// List all organization-wide alert configurations
        get_organization_alerts_profiles: GET "/organizations/{organizationId}/alerts/profiles" (organization_id);
        /// Create an organization-wide alert configuration
        create_organization_alerts_profile: POST "/organizations/{organizationId}/alerts/profiles" (organization_id);
        /// Update an organization-wide alert config
        update_organization_alerts_profile: PUT "/organizations/{organizationId}/alerts/profiles/{alertConfigId}" (organization_id, alert_config_id);
        /// Removes an organization-wide alert config
        delete_organization_alerts_profile: DELETE "/organizations/{organizationId}/alerts/profiles/{alertConfigId}" (organization_id, alert_config_id);
        /// List the API requests made by an organization
        get_organization_api_requests: GET "/organizations/{organizationId}/apiRequests" (organization_id) paged(Next);
        /// Return an aggregated overview of API requests data
        get_organization_api_requests_overview: GET "/organizations/{organizationId}/apiRequests/overview" (organization_id);
        /// Tracks organizations' API requests by response code across a given time period
        get_organization_api_requests_overview_response_codes_by_interval: GET "/organizations/{organizationId}/apiRequests/overview/responseCodes/byInterval" (organization_id);
        /// Return all health alerts for an organization
        get_organization_assurance_alerts: GET "/organizations/{organizationId}/assurance/alerts" (organization_id) paged(Next);
        /// Dismiss health alerts
        dismiss_organization_assurance_alerts: POST "/organizations/{organizationId}/assurance/alerts/dismiss" (organization_id, alert_ids: Vec<String>);
        /// Return overview of active health alerts for an organization
        get_organization_assurance_alerts_overview: GET "/organizations/{organizationId}/assurance/alerts/overview" (organization_id);
        /// Restore health alerts from dismissed
        restore_organization_assurance_alerts: POST "/organizations/{organizationId}/assurance/alerts/restore" (organization_id, alert_ids: Vec<String>);
        /// Return a singular Health Alert by its id
        get_organization_assurance_alert: GET "/organizations/{organizationId}/assurance/alerts/{id}" (organization_id, id);
        /// List the branding policies of an organization
        get_organization_branding_policies: GET "/organizations/{organizationId}/brandingPolicies" (organization_id);
        /// Add a new branding policy to an organization
        create_organization_branding_policy: POST "/organizations/{organizationId}/brandingPolicies" (organization_id);
        /// Return the branding policy IDs of an organization in priority order
        get_organization_branding_policies_priorities: GET "/organizations/{organizationId}/brandingPolicies/priorities" (organization_id);
        /// Update the priority ordering of an organization's branding policies
        update_organization_branding_policies_priorities: PUT "/organizations/{organizationId}/brandingPolicies/priorities" (organization_id);
        /// Return a branding policy
        get_organization_branding_policy: GET "/organizations/{organizationId}/brandingPolicies/{brandingPolicyId}" (organization_id, branding_policy_id);
        /// Update a branding policy
        update_organization_branding_policy: PUT "/organizations/{organizationId}/brandingPolicies/{brandingPolicyId}" (organization_id, branding_policy_id);
        /// Delete a branding policy
        delete_organization_branding_policy: DELETE "/organizations/{organizationId}/brandingPolicies/{brandingPolicyId}" (organization_id, branding_policy_id);
        /// Claim a list of devices, licenses, and/or orders into an organization
        claim_into_organization: POST "/organizations/{organizationId}/claim" (organization_id);
        /// Create a new organization by cloning the addressed organization
        clone_organization: POST "/organizations/{organizationId}/clone" (organization_id, name);
        /// Return data usage (in megabits per second) over time for all clients in the given organization
        get_organization_clients_bandwidth_usage_history: GET "/organizations/{organizationId}/clients/bandwidthUsageHistory" (organization_id);
        /// Return summary information around client data usage (in kb) across the given organization
        get_organization_clients_overview: GET "/organizations/{organizationId}/clients/overview" (organization_id);
        /// Return the client details in an organization
        get_organization_clients_search: GET "/organizations/{organizationId}/clients/search" (organization_id, mac) paged(Next);
        /// List the configuration templates for this organization
        get_organization_config_templates: GET "/organizations/{organizationId}/configTemplates" (organization_id);
        /// Create a new configuration template
        create_organization_config_template: POST "/organizations/{organizationId}/configTemplates" (organization_id, name);
        /// Return a single configuration template
        get_organization_config_template: GET "/organizations/{organizationId}/configTemplates/{configTemplateId}" (organization_id, config_template_id);
        /// Update a configuration template
        update_organization_config_template: PUT "/organizations/{organizationId}/configTemplates/{configTemplateId}" (organization_id, config_template_id);
        /// Remove a configuration template
        delete_organization_config_template: DELETE "/organizations/{organizationId}/configTemplates/{configTemplateId}" (organization_id, config_template_id);
        /// View the change log for your organization
        get_organization_configuration_changes: GET "/organizations/{organizationId}/configurationChanges" (organization_id) paged(Prev);
        /// List the devices in an organization
        get_organization_devices: GET "/organizations/{organizationId}/devices" (organization_id) paged(Next);
        /// List the availability information for devices in an organization
        get_organization_devices_availabilities: GET "/organizations/{organizationId}/devices/availabilities" (organization_id) paged(Next);
        /// List the availability history information for devices in an organization
        get_organization_devices_availabilities_change_history: GET "/organizations/{organizationId}/devices/availabilities/changeHistory" (organization_id) paged(Next);
        /// List the power status information for devices in an organization
        get_organization_devices_power_modules_statuses_by_device: GET "/organizations/{organizationId}/devices/powerModules/statuses/byDevice" (organization_id) paged(Next);
        /// List the provisioning statuses information for devices in an organization
        get_organization_devices_provisioning_statuses: GET "/organizations/{organizationId}/devices/provisioning/statuses" (organization_id) paged(Next);
        /// List the status of every Meraki device in the organization
        get_organization_devices_statuses: GET "/organizations/{organizationId}/devices/statuses" (organization_id) paged(Next);
        /// Return an overview of current device statuses
        get_organization_devices_statuses_overview: GET "/organizations/{organizationId}/devices/statuses/overview" (organization_id);
        /// Return the memory utilization history in kB for devices in the organization
        get_organization_devices_system_memory_usage_history_by_interval: GET "/organizations/{organizationId}/devices/system/memory/usage/history/byInterval" (organization_id) paged(Next);
        /// List the current uplink addresses for devices in an organization
        get_organization_devices_uplinks_addresses_by_device: GET "/organizations/{organizationId}/devices/uplinks/addresses/byDevice" (organization_id) paged(Next);
        /// Return the uplink loss and latency for every MX in the organization
        get_organization_devices_uplinks_loss_and_latency: GET "/organizations/{organizationId}/devices/uplinksLossAndLatency" (organization_id);
        /// List the available early access features for organization
        get_organization_early_access_features: GET "/organizations/{organizationId}/earlyAccess/features" (organization_id);
        /// List the early access feature opt-ins for an organization
        get_organization_early_access_features_opt_ins: GET "/organizations/{organizationId}/earlyAccess/features/optIns" (organization_id);
        /// Create a new early access feature opt-in for an organization
        create_organization_early_access_features_opt_in: POST "/organizations/{organizationId}/earlyAccess/features/optIns" (organization_id, short_name);
        /// Show an early access feature opt-in for an organization
        get_organization_early_access_features_opt_in: GET "/organizations/{organizationId}/earlyAccess/features/optIns/{optInId}" (organization_id, opt_in_id);
        /// Update an early access feature opt-in for an organization
        update_organization_early_access_features_opt_in: PUT "/organizations/{organizationId}/earlyAccess/features/optIns/{optInId}" (organization_id, opt_in_id);
        /// Delete an early access feature opt-in
        delete_organization_early_access_features_opt_in: DELETE "/organizations/{organizationId}/earlyAccess/features/optIns/{optInId}" (organization_id, opt_in_id);
        /// Get firmware upgrade information for an organization
        get_organization_firmware_upgrades: GET "/organizations/{organizationId}/firmware/upgrades" (organization_id) paged(Next);
        /// Get firmware upgrade status for the filtered devices
        get_organization_firmware_upgrades_by_device: GET "/organizations/{organizationId}/firmware/upgrades/byDevice" (organization_id) paged(Next);
        /// List auto locate details for each device in your organization
        get_organization_floor_plans_auto_locate_devices: GET "/organizations/{organizationId}/floorPlans/autoLocate/devices" (organization_id) paged(Next);
        /// List the status of auto locate for each floorplan in your organization
        get_organization_floor_plans_auto_locate_statuses: GET "/organizations/{organizationId}/floorPlans/autoLocate/statuses" (organization_id) paged(Next);
        /// Claim a list of devices, licenses, and/or orders into an organization inventory
        claim_into_organization_inventory: POST "/organizations/{organizationId}/inventory/claim" (organization_id);
        /// Return the device inventory for an organization
        get_organization_inventory_devices: GET "/organizations/{organizationId}/inventory/devices" (organization_id) paged(Next);
        /// Return a single device from the inventory of an organization
        get_organization_inventory_device: GET "/organizations/{organizationId}/inventory/devices/{serial}" (organization_id, serial);
        /// Imports event logs related to the onboarding app into elastisearch
        create_organization_inventory_onboarding_cloud_monitoring_export_event: POST "/organizations/{organizationId}/inventory/onboarding/cloudMonitoring/exportEvents" (organization_id, log_event);
        /// Check the status of a committed Import operation
        get_organization_inventory_onboarding_cloud_monitoring_imports: GET "/organizations/{organizationId}/inventory/onboarding/cloudMonitoring/imports" (organization_id, import_ids: Vec<String>);
        /// Commits the import operation to complete the onboarding of a device into Dashboard for monitoring
        create_organization_inventory_onboarding_cloud_monitoring_import: POST "/organizations/{organizationId}/inventory/onboarding/cloudMonitoring/imports" (organization_id, devices: serde_json::Value);
        /// Returns list of networks eligible for adding cloud monitored device
        get_organization_inventory_onboarding_cloud_monitoring_networks: GET "/organizations/{organizationId}/inventory/onboarding/cloudMonitoring/networks" (organization_id, device_type) paged(Next);
        /// Initiates or updates an import session
        create_organization_inventory_onboarding_cloud_monitoring_prepare: POST "/organizations/{organizationId}/inventory/onboarding/cloudMonitoring/prepare" (organization_id, devices: serde_json::Value);
        /// Release a list of claimed devices from an organization
        release_from_organization_inventory: POST "/organizations/{organizationId}/inventory/release" (organization_id);
        /// List the licenses for an organization
        get_organization_licenses: GET "/organizations/{organizationId}/licenses" (organization_id) paged(Next);
        /// Assign SM seats to a network
        assign_organization_licenses_seats: POST "/organizations/{organizationId}/licenses/assignSeats" (organization_id, license_id, network_id, seat_count: i64);
        /// Move licenses to another organization
        move_organization_licenses: POST "/organizations/{organizationId}/licenses/move" (organization_id, dest_organization_id, license_ids: Vec<String>);
        /// Move SM seats to another organization
        move_organization_licenses_seats: POST "/organizations/{organizationId}/licenses/moveSeats" (organization_id, dest_organization_id, license_id, seat_count: i64);
        /// Return an overview of the license state for an organization
        get_organization_licenses_overview: GET "/organizations/{organizationId}/licenses/overview" (organization_id);
        /// Renew SM seats of a license
        renew_organization_licenses_seats: POST "/organizations/{organizationId}/licenses/renewSeats" (organization_id, license_id_to_renew, unused_license_id);
        /// Display a license
        get_organization_license: GET "/organizations/{organizationId}/licenses/{licenseId}" (organization_id, license_id);
        /// Update a license
        update_organization_license: PUT "/organizations/{organizationId}/licenses/{licenseId}" (organization_id, license_id);
        /// Returns the login security settings for an organization
        get_organization_login_security: GET "/organizations/{organizationId}/loginSecurity" (organization_id);
        /// Update the login security settings for an organization
        update_organization_login_security: PUT "/organizations/{organizationId}/loginSecurity" (organization_id);
        /// List the networks that the user has privileges on in an organization
        get_organization_networks: GET "/organizations/{organizationId}/networks" (organization_id) paged(Next);
        /// Create a network
        create_organization_network: POST "/organizations/{organizationId}/networks" (organization_id, name, product_types: Vec<String>);
        /// Combine multiple networks into a single network
        combine_organization_networks: POST "/organizations/{organizationId}/networks/combine" (organization_id, name, network_ids: Vec<String>);
        /// Return the OpenAPI Specification of the organization's API documentation in JSON
        get_organization_openapi_spec: GET "/organizations/{organizationId}/openapiSpec" (organization_id);
        /// Lists Policy Objects belonging to the organization
        get_organization_policy_objects: GET "/organizations/{organizationId}/policyObjects" (organization_id) paged(Next);
        /// Creates a new Policy Object
        create_organization_policy_object: POST "/organizations/{organizationId}/policyObjects" (organization_id, name, category);
        /// Lists Policy Object Groups belonging to the organization
        get_organization_policy_objects_groups: GET "/organizations/{organizationId}/policyObjects/groups" (organization_id) paged(Next);
        /// Creates a new Policy Object Group
        create_organization_policy_objects_group: POST "/organizations/{organizationId}/policyObjects/groups" (organization_id, name);
        /// Shows details of a Policy Object Group
        get_organization_policy_objects_group: GET "/organizations/{organizationId}/policyObjects/groups/{policyObjectGroupId}" (organization_id, policy_object_group_id);
        /// Updates a Policy Object Group
        update_organization_policy_objects_group: PUT "/organizations/{organizationId}/policyObjects/groups/{policyObjectGroupId}" (organization_id, policy_object_group_id);
        /// Deletes a Policy Object Group
        delete_organization_policy_objects_group: DELETE "/organizations/{organizationId}/policyObjects/groups/{policyObjectGroupId}" (organization_id, policy_object_group_id);
        /// Shows details of a Policy Object
        get_organization_policy_object: GET "/organizations/{organizationId}/policyObjects/{policyObjectId}" (organization_id, policy_object_id);
        /// Updates a Policy Object
        update_organization_policy_object: PUT "/organizations/{organizationId}/policyObjects/{policyObjectId}" (organization_id, policy_object_id);
        /// Deletes a Policy Object
        delete_organization_policy_object: DELETE "/organizations/{organizationId}/policyObjects/{policyObjectId}" (organization_id, policy_object_id);
        /// Returns the SAML SSO enabled settings for an organization
        get_organization_saml: GET "/organizations/{organizationId}/saml" (organization_id);
        /// Updates the SAML SSO enabled settings for an organization
        update_organization_saml: PUT "/organizations/{organizationId}/saml" (organization_id);
        /// List the SAML IdPs in your organization
        get_organization_saml_idps: GET "/organizations/{organizationId}/saml/idps" (organization_id);
        /// Create a SAML IdP for your organization
        create_organization_saml_idp: POST "/organizations/{organizationId}/saml/idps" (organization_id, x509cert_sha1_fingerprint);
        /// Get a SAML IdP from your organization
        get_organization_saml_idp: GET "/organizations/{organizationId}/saml/idps/{idpId}" (organization_id, idp_id);
        /// Update a SAML IdP in your organization
        update_organization_saml_idp: PUT "/organizations/{organizationId}/saml/idps/{idpId}" (organization_id, idp_id);
        /// Remove a SAML IdP in your organization
        delete_organization_saml_idp: DELETE "/organizations/{organizationId}/saml/idps/{idpId}" (organization_id, idp_id);
        /// List the SAML roles for this organization
        get_organization_saml_roles: GET "/organizations/{organizationId}/samlRoles" (organization_id);
        /// Create a SAML role
        create_organization_saml_role: POST "/organizations/{organizationId}/samlRoles" (organization_id, role, org_access);
        /// Return a SAML role
        get_organization_saml_role: GET "/organizations/{organizationId}/samlRoles/{samlRoleId}" (organization_id, saml_role_id);
        /// Update a SAML role
        update_organization_saml_role: PUT "/organizations/{organizationId}/samlRoles/{samlRoleId}" (organization_id, saml_role_id);
        /// Remove a SAML role
        delete_organization_saml_role: DELETE "/organizations/{organizationId}/samlRoles/{samlRoleId}" (organization_id, saml_role_id);
        /// Return the SNMP settings for an organization
        get_organization_snmp: GET "/organizations/{organizationId}/snmp" (organization_id);
        /// Update the SNMP settings for an organization
        update_organization_snmp: PUT "/organizations/{organizationId}/snmp" (organization_id);
        /// Return the top 10 appliances sorted by utilization over given time range
        get_organization_summary_top_appliances_by_utilization: GET "/organizations/{organizationId}/summary/top/appliances/byUtilization" (organization_id);
        /// Return the top applications sorted by data usage over given time range
        get_organization_summary_top_applications_by_usage: GET "/organizations/{organizationId}/summary/top/applications/byUsage" (organization_id);
        /// Return the top application categories sorted by data usage over given time range
        get_organization_summary_top_applications_categories_by_usage: GET "/organizations/{organizationId}/summary/top/applications/categories/byUsage" (organization_id);
        /// Return the top clients by data usage (in mb) over given time range
        get_organization_summary_top_clients_by_usage: GET "/organizations/{organizationId}/summary/top/clients/byUsage" (organization_id);
        /// Return the top clients by data usage (in mb) over given time range, grouped by manufacturer
        get_organization_summary_top_clients_manufacturers_by_usage: GET "/organizations/{organizationId}/summary/top/clients/manufacturers/byUsage" (organization_id);
        /// Return metrics for organization's top clients by data usage (in mb) over given time range
        get_organization_summary_top_devices_by_usage: GET "/organizations/{organizationId}/summary/top/devices/byUsage" (organization_id);
        /// Return metrics for organization's top clients by data usage (in mb) over given time range, grouped by device model
        get_organization_summary_top_devices_models_by_usage: GET "/organizations/{organizationId}/summary/top/devices/models/byUsage" (organization_id);
        /// List the client and status overview information for the networks in an organization
        get_organization_summary_top_networks_by_status: GET "/organizations/{organizationId}/summary/top/networks/byStatus" (organization_id) paged(Next);
        /// Return metrics for organization's top 10 ssids by data usage over given time range
        get_organization_summary_top_ssids_by_usage: GET "/organizations/{organizationId}/summary/top/ssids/byUsage" (organization_id);
        /// Return metrics for organization's top 10 switches by energy usage over given time range
        get_organization_summary_top_switches_by_energy_usage: GET "/organizations/{organizationId}/summary/top/switches/byEnergyUsage" (organization_id);
        /// List the uplink status of every Meraki MX, MG and Z series devices in the organization
        get_organization_uplinks_statuses: GET "/organizations/{organizationId}/uplinks/statuses" (organization_id) paged(Next);
        /// Return a list of alert types to be used with managing webhook alerts
        get_organization_webhooks_alert_types: GET "/organizations/{organizationId}/webhooks/alertTypes" (organization_id);
        /// Return the status of an API callback
        get_organization_webhooks_callbacks_status: GET "/organizations/{organizationId}/webhooks/callbacks/statuses/{callbackId}" (organization_id, callback_id);
        /// Return the log of webhook POSTs sent
        get_organization_webhooks_logs: GET "/organizations/{organizationId}/webhooks/logs" (organization_id) paged(Next);
    }

    "appliance" {
        /// Return the DHCP subnet information for an appliance
        get_device_appliance_dhcp_subnets: GET "/devices/{serial}/appliance/dhcp/subnets" (serial);
        /// Return the performance score for a single MX
        get_device_appliance_performance: GET "/devices/{serial}/appliance/performance" (serial);
        /// Return current delegated IPv6 prefixes on an appliance
        get_device_appliance_prefixes_delegated: GET "/devices/{serial}/appliance/prefixes/delegated" (serial);
        /// Return prefixes assigned to all IPv6 enabled VLANs on an appliance
        get_device_appliance_prefixes_delegated_vlan_assignments: GET "/devices/{serial}/appliance/prefixes/delegated/vlanAssignments" (serial);
        /// Return the radio settings of an appliance
        get_device_appliance_radio_settings: GET "/devices/{serial}/appliance/radio/settings" (serial);
        /// Update the radio settings of an appliance
        update_device_appliance_radio_settings: PUT "/devices/{serial}/appliance/radio/settings" (serial);
        /// Return the uplink settings for an MX appliance
        get_device_appliance_uplinks_settings: GET "/devices/{serial}/appliance/uplinks/settings" (serial);
        /// Update the uplink settings for an MX appliance
        update_device_appliance_uplinks_settings: PUT "/devices/{serial}/appliance/uplinks/settings" (serial, interfaces: serde_json::Value);
        /// Generate a new vMX authentication token
        create_device_appliance_vmx_authentication_token: POST "/devices/{serial}/appliance/vmx/authenticationToken" (serial);
        /// List the security events for a client
        get_network_appliance_client_security_events: GET "/networks/{networkId}/appliance/clients/{clientId}/security/events" (network_id, client_id) paged(Next);
        /// Return the connectivity testing destinations for an MX network
        get_network_appliance_connectivity_monitoring_destinations: GET "/networks/{networkId}/appliance/connectivityMonitoringDestinations" (network_id);
        /// Update the connectivity testing destinations for an MX network
        update_network_appliance_connectivity_monitoring_destinations: PUT "/networks/{networkId}/appliance/connectivityMonitoringDestinations" (network_id);
        /// Return the content filtering settings for an MX network
        get_network_appliance_content_filtering: GET "/networks/{networkId}/appliance/contentFiltering" (network_id);
        /// Update the content filtering settings for an MX network
        update_network_appliance_content_filtering: PUT "/networks/{networkId}/appliance/contentFiltering" (network_id);
        /// List all available content filtering categories for an MX network
        get_network_appliance_content_filtering_categories: GET "/networks/{networkId}/appliance/contentFiltering/categories" (network_id);
        /// Return the cellular firewall rules for an MX network
        get_network_appliance_firewall_cellular_firewall_rules: GET "/networks/{networkId}/appliance/firewall/cellularFirewallRules" (network_id);
        /// Update the cellular firewall rules of an MX network
        update_network_appliance_firewall_cellular_firewall_rules: PUT "/networks/{networkId}/appliance/firewall/cellularFirewallRules" (network_id);
        /// List the appliance services and their accessibility rules
        get_network_appliance_firewall_firewalled_services: GET "/networks/{networkId}/appliance/firewall/firewalledServices" (network_id);
        /// Return the accessibility settings of the given service
        get_network_appliance_firewall_firewalled_service: GET "/networks/{networkId}/appliance/firewall/firewalledServices/{service}" (network_id, service);
        /// Updates the accessibility settings for the given service
        update_network_appliance_firewall_firewalled_service: PUT "/networks/{networkId}/appliance/firewall/firewalledServices/{service}" (network_id, service, access);
        /// Return the inbound cellular firewall rules for an MX network
        get_network_appliance_firewall_inbound_cellular_firewall_rules: GET "/networks/{networkId}/appliance/firewall/inboundCellularFirewallRules" (network_id);
        /// Update the inbound cellular firewall rules of an MX network
        update_network_appliance_firewall_inbound_cellular_firewall_rules: PUT "/networks/{networkId}/appliance/firewall/inboundCellularFirewallRules" (network_id);
        /// Return the inbound firewall rules for an MX network
        get_network_appliance_firewall_inbound_firewall_rules: GET "/networks/{networkId}/appliance/firewall/inboundFirewallRules" (network_id);
        /// Update the inbound firewall rules of an MX network
        update_network_appliance_firewall_inbound_firewall_rules: PUT "/networks/{networkId}/appliance/firewall/inboundFirewallRules" (network_id);
        /// Return the L3 firewall rules for an MX network
        get_network_appliance_firewall_l3_firewall_rules: GET "/networks/{networkId}/appliance/firewall/l3FirewallRules" (network_id);
        /// Update the L3 firewall rules of an MX network
        update_network_appliance_firewall_l3_firewall_rules: PUT "/networks/{networkId}/appliance/firewall/l3FirewallRules" (network_id);
        /// List the MX L7 firewall rules for an MX network
        get_network_appliance_firewall_l7_firewall_rules: GET "/networks/{networkId}/appliance/firewall/l7FirewallRules" (network_id);
        /// Update the MX L7 firewall rules for an MX network
        update_network_appliance_firewall_l7_firewall_rules: PUT "/networks/{networkId}/appliance/firewall/l7FirewallRules" (network_id);
        /// Return the L7 firewall application categories and their associated applications for an MX network
        get_network_appliance_firewall_l7_firewall_rules_application_categories: GET "/networks/{networkId}/appliance/firewall/l7FirewallRules/applicationCategories" (network_id);
        /// Return the 1:Many NAT mapping rules for an MX network
        get_network_appliance_firewall_one_to_many_nat_rules: GET "/networks/{networkId}/appliance/firewall/oneToManyNatRules" (network_id);
        /// Set the 1:Many NAT mapping rules for an MX network
        update_network_appliance_firewall_one_to_many_nat_rules: PUT "/networks/{networkId}/appliance/firewall/oneToManyNatRules" (network_id, rules: serde_json::Value);
        /// Return the 1:1 NAT mapping rules for an MX network
        get_network_appliance_firewall_one_to_one_nat_rules: GET "/networks/{networkId}/appliance/firewall/oneToOneNatRules" (network_id);
        /// Set the 1:1 NAT mapping rules for an MX network
        update_network_appliance_firewall_one_to_one_nat_rules: PUT "/networks/{networkId}/appliance/firewall/oneToOneNatRules" (network_id, rules: serde_json::Value);
        /// Return the port forwarding rules for an MX network
        get_network_appliance_firewall_port_forwarding_rules: GET "/networks/{networkId}/appliance/firewall/portForwardingRules" (network_id);
        /// Update the port forwarding rules for an MX network
        update_network_appliance_firewall_port_forwarding_rules: PUT "/networks/{networkId}/appliance/firewall/portForwardingRules" (network_id, rules: serde_json::Value);
        /// Return the firewall settings for this network
        get_network_appliance_firewall_settings: GET "/networks/{networkId}/appliance/firewall/settings" (network_id);
        /// Update the firewall settings for this network
        update_network_appliance_firewall_settings: PUT "/networks/{networkId}/appliance/firewall/settings" (network_id);
        /// List per-port VLAN settings for all ports of a MX
        get_network_appliance_ports: GET "/networks/{networkId}/appliance/ports" (network_id);
        /// Return per-port VLAN settings for a single MX port
        get_network_appliance_port: GET "/networks/{networkId}/appliance/ports/{portId}" (network_id, port_id);
        /// Update the per-port VLAN settings for a single MX port
        update_network_appliance_port: PUT "/networks/{networkId}/appliance/ports/{portId}" (network_id, port_id);
        /// List static delegated prefixes for a network
        get_network_appliance_prefixes_delegated_statics: GET "/networks/{networkId}/appliance/prefixes/delegated/statics" (network_id);
        /// Add a static delegated prefix from a network
        create_network_appliance_prefixes_delegated_static: POST "/networks/{networkId}/appliance/prefixes/delegated/statics" (network_id, prefix, origin: serde_json::Value);
        /// Return a static delegated prefix from a network
        get_network_appliance_prefixes_delegated_static: GET "/networks/{networkId}/appliance/prefixes/delegated/statics/{staticDelegatedPrefixId}" (network_id, static_delegated_prefix_id);
        /// Update a static delegated prefix from a network
        update_network_appliance_prefixes_delegated_static: PUT "/networks/{networkId}/appliance/prefixes/delegated/statics/{staticDelegatedPrefixId}" (network_id, static_delegated_prefix_id);
        /// Delete a static delegated prefix from a network
        delete_network_appliance_prefixes_delegated_static: DELETE "/networks/{networkId}/appliance/prefixes/delegated/statics/{staticDelegatedPrefixId}" (network_id, static_delegated_prefix_id);
        /// List the RF profiles for this network
        get_network_appliance_rf_profiles: GET "/networks/{networkId}/appliance/rfProfiles" (network_id);
        /// Creates new RF profile for this network
        create_network_appliance_rf_profile: POST "/networks/{networkId}/appliance/rfProfiles" (network_id, name);
        /// Return a RF profile
        get_network_appliance_rf_profile: GET "/networks/{networkId}/appliance/rfProfiles/{rfProfileId}" (network_id, rf_profile_id);
        /// Updates specified RF profile for this network
        update_network_appliance_rf_profile: PUT "/networks/{networkId}/appliance/rfProfiles/{rfProfileId}" (network_id, rf_profile_id);
        /// Delete a RF Profile
        delete_network_appliance_rf_profile: DELETE "/networks/{networkId}/appliance/rfProfiles/{rfProfileId}" (network_id, rf_profile_id);
        /// List the security events for a network
        get_network_appliance_security_events: GET "/networks/{networkId}/appliance/security/events" (network_id) paged(Next);
        /// Returns all supported intrusion settings for an MX network
        get_network_appliance_security_intrusion: GET "/networks/{networkId}/appliance/security/intrusion" (network_id);
        /// Set the supported intrusion settings for an MX network
        update_network_appliance_security_intrusion: PUT "/networks/{networkId}/appliance/security/intrusion" (network_id);
        /// Returns all supported malware settings for an MX network
        get_network_appliance_security_malware: GET "/networks/{networkId}/appliance/security/malware" (network_id);
        /// Set the supported malware settings for an MX network
        update_network_appliance_security_malware: PUT "/networks/{networkId}/appliance/security/malware" (network_id, mode);
        /// Return the appliance settings for a network
        get_network_appliance_settings: GET "/networks/{networkId}/appliance/settings" (network_id);
        /// Update the appliance settings for a network
        update_network_appliance_settings: PUT "/networks/{networkId}/appliance/settings" (network_id);
        /// Return single LAN configuration
        get_network_appliance_single_lan: GET "/networks/{networkId}/appliance/singleLan" (network_id);
        /// Update single LAN configuration
        update_network_appliance_single_lan: PUT "/networks/{networkId}/appliance/singleLan" (network_id);
        /// List the MX SSIDs in a network
        get_network_appliance_ssids: GET "/networks/{networkId}/appliance/ssids" (network_id);
        /// Return a single MX SSID
        get_network_appliance_ssid: GET "/networks/{networkId}/appliance/ssids/{number}" (network_id, number);
        /// Update a single MX SSID
        update_network_appliance_ssid: PUT "/networks/{networkId}/appliance/ssids/{number}" (network_id, number);
        /// List the static routes for an MX or teleworker network
        get_network_appliance_static_routes: GET "/networks/{networkId}/appliance/staticRoutes" (network_id);
        /// Add a static route for an MX or teleworker network
        create_network_appliance_static_route: POST "/networks/{networkId}/appliance/staticRoutes" (network_id, name, subnet, gateway_ip);
        /// Return a static route for an MX or teleworker network
        get_network_appliance_static_route: GET "/networks/{networkId}/appliance/staticRoutes/{staticRouteId}" (network_id, static_route_id);
        /// Update a static route for an MX or teleworker network
        update_network_appliance_static_route: PUT "/networks/{networkId}/appliance/staticRoutes/{staticRouteId}" (network_id, static_route_id);
        /// Delete a static route from an MX or teleworker network
        delete_network_appliance_static_route: DELETE "/networks/{networkId}/appliance/staticRoutes/{staticRouteId}" (network_id, static_route_id);
        /// Display the traffic shaping settings for an MX network
        get_network_appliance_traffic_shaping: GET "/networks/{networkId}/appliance/trafficShaping" (network_id);
        /// Update the traffic shaping settings for an MX network
        update_network_appliance_traffic_shaping: PUT "/networks/{networkId}/appliance/trafficShaping" (network_id);
        /// List all custom performance classes for an MX network
        get_network_appliance_traffic_shaping_custom_performance_classes: GET "/networks/{networkId}/appliance/trafficShaping/customPerformanceClasses" (network_id);
        /// Add a custom performance class for an MX network
        create_network_appliance_traffic_shaping_custom_performance_class: POST "/networks/{networkId}/appliance/trafficShaping/customPerformanceClasses" (network_id, name);
        /// Return a custom performance class for an MX network
        get_network_appliance_traffic_shaping_custom_performance_class: GET "/networks/{networkId}/appliance/trafficShaping/customPerformanceClasses/{customPerformanceClassId}" (network_id, custom_performance_class_id);
        /// Update a custom performance class for an MX network
        update_network_appliance_traffic_shaping_custom_performance_class: PUT "/networks/{networkId}/appliance/trafficShaping/customPerformanceClasses/{customPerformanceClassId}" (network_id, custom_performance_class_id);
        /// Delete a custom performance class from an MX network
        delete_network_appliance_traffic_shaping_custom_performance_class: DELETE "/networks/{networkId}/appliance/trafficShaping/customPerformanceClasses/{customPerformanceClassId}" (network_id, custom_performance_class_id);
        /// Display the traffic shaping settings rules for an MX network
        get_network_appliance_traffic_shaping_rules: GET "/networks/{networkId}/appliance/trafficShaping/rules" (network_id);
        /// Update the traffic shaping settings rules for an MX network
        update_network_appliance_traffic_shaping_rules: PUT "/networks/{networkId}/appliance/trafficShaping/rules" (network_id);
        /// Returns the uplink bandwidth limits for your MX network
        get_network_appliance_traffic_shaping_uplink_bandwidth: GET "/networks/{networkId}/appliance/trafficShaping/uplinkBandwidth" (network_id);
        /// Updates the uplink bandwidth settings for your MX network
        update_network_appliance_traffic_shaping_uplink_bandwidth: PUT "/networks/{networkId}/appliance/trafficShaping/uplinkBandwidth" (network_id);
        /// Show uplink selection settings for an MX network
        get_network_appliance_traffic_shaping_uplink_selection: GET "/networks/{networkId}/appliance/trafficShaping/uplinkSelection" (network_id);
        /// Update uplink selection settings for an MX network
        update_network_appliance_traffic_shaping_uplink_selection: PUT "/networks/{networkId}/appliance/trafficShaping/uplinkSelection" (network_id);
        /// Update VPN exclusion rules for an MX network
        update_network_appliance_traffic_shaping_vpn_exclusions: PUT "/networks/{networkId}/appliance/trafficShaping/vpnExclusions" (network_id);
        /// Get the sent and received bytes for each uplink of a network
        get_network_appliance_uplinks_usage_history: GET "/networks/{networkId}/appliance/uplinks/usageHistory" (network_id);
        /// List the VLANs for an MX network
        get_network_appliance_vlans: GET "/networks/{networkId}/appliance/vlans" (network_id);
        /// Add a VLAN
        create_network_appliance_vlan: POST "/networks/{networkId}/appliance/vlans" (network_id, id, name);
        /// Returns the enabled status of VLANs for the network
        get_network_appliance_vlans_settings: GET "/networks/{networkId}/appliance/vlans/settings" (network_id);
        /// Enable/Disable VLANs for the given network
        update_network_appliance_vlans_settings: PUT "/networks/{networkId}/appliance/vlans/settings" (network_id);
        /// Return a VLAN
        get_network_appliance_vlan: GET "/networks/{networkId}/appliance/vlans/{vlanId}" (network_id, vlan_id);
        /// Update a VLAN
        update_network_appliance_vlan: PUT "/networks/{networkId}/appliance/vlans/{vlanId}" (network_id, vlan_id);
        /// Delete a VLAN from a network
        delete_network_appliance_vlan: DELETE "/networks/{networkId}/appliance/vlans/{vlanId}" (network_id, vlan_id);
        /// Return a Hub BGP Configuration
        get_network_appliance_vpn_bgp: GET "/networks/{networkId}/appliance/vpn/bgp" (network_id);
        /// Update a Hub BGP Configuration
        update_network_appliance_vpn_bgp: PUT "/networks/{networkId}/appliance/vpn/bgp" (network_id, enabled: bool);
        /// Return the site-to-site VPN settings of a network
        get_network_appliance_vpn_site_to_site_vpn: GET "/networks/{networkId}/appliance/vpn/siteToSiteVpn" (network_id);
        /// Update the site-to-site VPN settings of a network
        update_network_appliance_vpn_site_to_site_vpn: PUT "/networks/{networkId}/appliance/vpn/siteToSiteVpn" (network_id, mode);
        /// Return MX warm spare settings
        get_network_appliance_warm_spare: GET "/networks/{networkId}/appliance/warmSpare" (network_id);
        /// Update MX warm spare settings
        update_network_appliance_warm_spare: PUT "/networks/{networkId}/appliance/warmSpare" (network_id, enabled: bool);
        /// Swap MX primary and warm spare appliances
        swap_network_appliance_warm_spare: POST "/networks/{networkId}/appliance/warmSpare/swap" (network_id);
        /// List the security events for an organization
        get_organization_appliance_security_events: GET "/organizations/{organizationId}/appliance/security/events" (organization_id) paged(Next);
        /// Returns all supported intrusion settings for an organization
        get_organization_appliance_security_intrusion: GET "/organizations/{organizationId}/appliance/security/intrusion" (organization_id);
        /// Sets supported intrusion settings for an organization
        update_organization_appliance_security_intrusion: PUT "/organizations/{organizationId}/appliance/security/intrusion" (organization_id, allowed_rules: serde_json::Value);
        /// Display VPN exclusion rules for MX networks
        get_organization_appliance_traffic_shaping_vpn_exclusions_by_network: GET "/organizations/{organizationId}/appliance/trafficShaping/vpnExclusions/byNetwork" (organization_id) paged(Next);
        /// List the uplink status of every Meraki MX and Z series appliances in the organization
        get_organization_appliance_uplink_statuses: GET "/organizations/{organizationId}/appliance/uplink/statuses" (organization_id) paged(Next);
        /// Returns an overview of uplink statuses
        get_organization_appliance_uplinks_statuses_overview: GET "/organizations/{organizationId}/appliance/uplinks/statuses/overview" (organization_id);
        /// Get the sent and received bytes for each uplink of all MX and Z networks within an organization
        get_organization_appliance_uplinks_usage_by_network: GET "/organizations/{organizationId}/appliance/uplinks/usage/byNetwork" (organization_id);
        /// Show VPN history stat for networks in an organization
        get_organization_appliance_vpn_stats: GET "/organizations/{organizationId}/appliance/vpn/stats" (organization_id) paged(Next);
        /// Show VPN status for networks in an organization
        get_organization_appliance_vpn_statuses: GET "/organizations/{organizationId}/appliance/vpn/statuses" (organization_id) paged(Next);
        /// Return the third party VPN peers for an organization
        get_organization_appliance_vpn_third_party_vpn_peers: GET "/organizations/{organizationId}/appliance/vpn/thirdPartyVPNPeers" (organization_id);
        /// Update the third party VPN peers for an organization
        update_organization_appliance_vpn_third_party_vpn_peers: PUT "/organizations/{organizationId}/appliance/vpn/thirdPartyVPNPeers" (organization_id, peers: serde_json::Value);
        /// Return the firewall rules for an organization's site-to-site VPN
        get_organization_appliance_vpn_vpn_firewall_rules: GET "/organizations/{organizationId}/appliance/vpn/vpnFirewallRules" (organization_id);
        /// Update the firewall rules of an organization's site-to-site VPN
        update_organization_appliance_vpn_vpn_firewall_rules: PUT "/organizations/{organizationId}/appliance/vpn/vpnFirewallRules" (organization_id);
    }

    "switch" {
        /// List the switch ports for a switch
        get_device_switch_ports: GET "/devices/{serial}/switch/ports" (serial);
        /// Cycle a set of switch ports
        cycle_device_switch_ports: POST "/devices/{serial}/switch/ports/cycle" (serial, ports: Vec<String>);
        /// Return the status for all the ports of a switch
        get_device_switch_ports_statuses: GET "/devices/{serial}/switch/ports/statuses" (serial);
        /// Return the packet counters for all the ports of a switch
        get_device_switch_ports_statuses_packets: GET "/devices/{serial}/switch/ports/statuses/packets" (serial);
        /// Return a switch port
        get_device_switch_port: GET "/devices/{serial}/switch/ports/{portId}" (serial, port_id);
        /// Update a switch port
        update_device_switch_port: PUT "/devices/{serial}/switch/ports/{portId}" (serial, port_id);
        /// List layer 3 interfaces for a switch
        get_device_switch_routing_interfaces: GET "/devices/{serial}/switch/routing/interfaces" (serial);
        /// Create a layer 3 interface for a switch
        create_device_switch_routing_interface: POST "/devices/{serial}/switch/routing/interfaces" (serial, name);
        /// Return a layer 3 interface for a switch
        get_device_switch_routing_interface: GET "/devices/{serial}/switch/routing/interfaces/{interfaceId}" (serial, interface_id);
        /// Update a layer 3 interface for a switch
        update_device_switch_routing_interface: PUT "/devices/{serial}/switch/routing/interfaces/{interfaceId}" (serial, interface_id);
        /// Delete a layer 3 interface from the switch
        delete_device_switch_routing_interface: DELETE "/devices/{serial}/switch/routing/interfaces/{interfaceId}" (serial, interface_id);
        /// Return a layer 3 interface DHCP configuration for a switch
        get_device_switch_routing_interface_dhcp: GET "/devices/{serial}/switch/routing/interfaces/{interfaceId}/dhcp" (serial, interface_id);
        /// Update a layer 3 interface DHCP configuration for a switch
        update_device_switch_routing_interface_dhcp: PUT "/devices/{serial}/switch/routing/interfaces/{interfaceId}/dhcp" (serial, interface_id);
        /// List layer 3 static routes for a switch
        get_device_switch_routing_static_routes: GET "/devices/{serial}/switch/routing/staticRoutes" (serial);
        /// Create a layer 3 static route for a switch
        create_device_switch_routing_static_route: POST "/devices/{serial}/switch/routing/staticRoutes" (serial, subnet, next_hop_ip);
        /// Return a layer 3 static route for a switch
        get_device_switch_routing_static_route: GET "/devices/{serial}/switch/routing/staticRoutes/{staticRouteId}" (serial, static_route_id);
        /// Update a layer 3 static route for a switch
        update_device_switch_routing_static_route: PUT "/devices/{serial}/switch/routing/staticRoutes/{staticRouteId}" (serial, static_route_id);
        /// Delete a layer 3 static route for a switch
        delete_device_switch_routing_static_route: DELETE "/devices/{serial}/switch/routing/staticRoutes/{staticRouteId}" (serial, static_route_id);
        /// Return warm spare configuration for a switch
        get_device_switch_warm_spare: GET "/devices/{serial}/switch/warmSpare" (serial);
        /// Update warm spare configuration for a switch
        update_device_switch_warm_spare: PUT "/devices/{serial}/switch/warmSpare" (serial, enabled: bool);
        /// Return the access control lists for a MS network
        get_network_switch_access_control_lists: GET "/networks/{networkId}/switch/accessControlLists" (network_id);
        /// Update the access control lists for a MS network
        update_network_switch_access_control_lists: PUT "/networks/{networkId}/switch/accessControlLists" (network_id, rules: serde_json::Value);
        /// List the access policies for a switch network
        get_network_switch_access_policies: GET "/networks/{networkId}/switch/accessPolicies" (network_id);
        /// Create an access policy for a switch network
        create_network_switch_access_policy: POST "/networks/{networkId}/switch/accessPolicies" (network_id, name, radius_servers: serde_json::Value, radius_testing_enabled: bool, radius_coa_support_enabled: bool, radius_accounting_enabled: bool, host_mode, url_redirect_walled_garden_enabled: bool);
        /// Return a specific access policy for a switch network
        get_network_switch_access_policy: GET "/networks/{networkId}/switch/accessPolicies/{accessPolicyNumber}" (network_id, access_policy_number);
        /// Update an access policy for a switch network
        update_network_switch_access_policy: PUT "/networks/{networkId}/switch/accessPolicies/{accessPolicyNumber}" (network_id, access_policy_number);
        /// Delete an access policy for a switch network
        delete_network_switch_access_policy: DELETE "/networks/{networkId}/switch/accessPolicies/{accessPolicyNumber}" (network_id, access_policy_number);
        /// Return the switch alternate management interface for the network
        get_network_switch_alternate_management_interface: GET "/networks/{networkId}/switch/alternateManagementInterface" (network_id);
        /// Update the switch alternate management interface for the network
        update_network_switch_alternate_management_interface: PUT "/networks/{networkId}/switch/alternateManagementInterface" (network_id);
        /// Return the network's DHCPv4 servers seen within the selected timeframe (default 1 day)
        get_network_switch_dhcp_v4_servers_seen: GET "/networks/{networkId}/switch/dhcp/v4/servers/seen" (network_id) paged(Next);
        /// Return the DHCP server settings
        get_network_switch_dhcp_server_policy: GET "/networks/{networkId}/switch/dhcpServerPolicy" (network_id);
        /// Update the DHCP server settings
        update_network_switch_dhcp_server_policy: PUT "/networks/{networkId}/switch/dhcpServerPolicy" (network_id);
        /// Return the list of servers trusted by Dynamic ARP Inspection on this network
        get_network_switch_dhcp_server_policy_arp_inspection_trusted_servers: GET "/networks/{networkId}/switch/dhcpServerPolicy/arpInspection/trustedServers" (network_id) paged(Next);
        /// Add a server to be trusted by Dynamic ARP Inspection on this network
        create_network_switch_dhcp_server_policy_arp_inspection_trusted_server: POST "/networks/{networkId}/switch/dhcpServerPolicy/arpInspection/trustedServers" (network_id, mac, vlan: i64, ipv4: serde_json::Value);
        /// Update a server that is trusted by Dynamic ARP Inspection on this network
        update_network_switch_dhcp_server_policy_arp_inspection_trusted_server: PUT "/networks/{networkId}/switch/dhcpServerPolicy/arpInspection/trustedServers/{trustedServerId}" (network_id, trusted_server_id);
        /// Remove a server from being trusted by Dynamic ARP Inspection on this network
        delete_network_switch_dhcp_server_policy_arp_inspection_trusted_server: DELETE "/networks/{networkId}/switch/dhcpServerPolicy/arpInspection/trustedServers/{trustedServerId}" (network_id, trusted_server_id);
        /// Return the devices that have a Dynamic ARP Inspection warning and their warnings
        get_network_switch_dhcp_server_policy_arp_inspection_warnings_by_device: GET "/networks/{networkId}/switch/dhcpServerPolicy/arpInspection/warnings/byDevice" (network_id) paged(Next);
        /// Return the DSCP to CoS mappings
        get_network_switch_dscp_to_cos_mappings: GET "/networks/{networkId}/switch/dscpToCosMappings" (network_id);
        /// Update the DSCP to CoS mappings
        update_network_switch_dscp_to_cos_mappings: PUT "/networks/{networkId}/switch/dscpToCosMappings" (network_id, mappings: serde_json::Value);
        /// List link aggregation groups
        get_network_switch_link_aggregations: GET "/networks/{networkId}/switch/linkAggregations" (network_id);
        /// Create a link aggregation group
        create_network_switch_link_aggregation: POST "/networks/{networkId}/switch/linkAggregations" (network_id);
        /// Update a link aggregation group
        update_network_switch_link_aggregation: PUT "/networks/{networkId}/switch/linkAggregations/{linkAggregationId}" (network_id, link_aggregation_id);
        /// Split a link aggregation group into separate ports
        delete_network_switch_link_aggregation: DELETE "/networks/{networkId}/switch/linkAggregations/{linkAggregationId}" (network_id, link_aggregation_id);
        /// Return the MTU configuration
        get_network_switch_mtu: GET "/networks/{networkId}/switch/mtu" (network_id);
        /// Update the MTU configuration
        update_network_switch_mtu: PUT "/networks/{networkId}/switch/mtu" (network_id);
        /// List switch port schedules
        get_network_switch_port_schedules: GET "/networks/{networkId}/switch/portSchedules" (network_id);
        /// Add a switch port schedule
        create_network_switch_port_schedule: POST "/networks/{networkId}/switch/portSchedules" (network_id, name);
        /// Update a switch port schedule
        update_network_switch_port_schedule: PUT "/networks/{networkId}/switch/portSchedules/{portScheduleId}" (network_id, port_schedule_id);
        /// Delete a switch port schedule
        delete_network_switch_port_schedule: DELETE "/networks/{networkId}/switch/portSchedules/{portScheduleId}" (network_id, port_schedule_id);
        /// List quality of service rules
        get_network_switch_qos_rules: GET "/networks/{networkId}/switch/qosRules" (network_id);
        /// Add a quality of service rule
        create_network_switch_qos_rule: POST "/networks/{networkId}/switch/qosRules" (network_id, vlan: i64);
        /// Return the quality of service rule IDs by order in which they will be processed by the switch
        get_network_switch_qos_rules_order: GET "/networks/{networkId}/switch/qosRules/order" (network_id);
        /// Update the order in which the rules should be processed by the switch
        update_network_switch_qos_rules_order: PUT "/networks/{networkId}/switch/qosRules/order" (network_id, rule_ids: Vec<String>);
        /// Return a quality of service rule
        get_network_switch_qos_rule: GET "/networks/{networkId}/switch/qosRules/{qosRuleId}" (network_id, qos_rule_id);
        /// Update a quality of service rule
        update_network_switch_qos_rule: PUT "/networks/{networkId}/switch/qosRules/{qosRuleId}" (network_id, qos_rule_id);
        /// Delete a quality of service rule
        delete_network_switch_qos_rule: DELETE "/networks/{networkId}/switch/qosRules/{qosRuleId}" (network_id, qos_rule_id);
        /// Return multicast settings for a network
        get_network_switch_routing_multicast: GET "/networks/{networkId}/switch/routing/multicast" (network_id);
        /// Update multicast settings for a network
        update_network_switch_routing_multicast: PUT "/networks/{networkId}/switch/routing/multicast" (network_id);
        /// List multicast rendezvous points
        get_network_switch_routing_multicast_rendezvous_points: GET "/networks/{networkId}/switch/routing/multicast/rendezvousPoints" (network_id);
        /// Create a multicast rendezvous point
        create_network_switch_routing_multicast_rendezvous_point: POST "/networks/{networkId}/switch/routing/multicast/rendezvousPoints" (network_id, interface_ip, multicast_group);
        /// Return a multicast rendezvous point
        get_network_switch_routing_multicast_rendezvous_point: GET "/networks/{networkId}/switch/routing/multicast/rendezvousPoints/{rendezvousPointId}" (network_id, rendezvous_point_id);
        /// Update a multicast rendezvous point
        update_network_switch_routing_multicast_rendezvous_point: PUT "/networks/{networkId}/switch/routing/multicast/rendezvousPoints/{rendezvousPointId}" (network_id, rendezvous_point_id, interface_ip, multicast_group);
        /// Delete a multicast rendezvous point
        delete_network_switch_routing_multicast_rendezvous_point: DELETE "/networks/{networkId}/switch/routing/multicast/rendezvousPoints/{rendezvousPointId}" (network_id, rendezvous_point_id);
        /// Return layer 3 OSPF routing configuration
        get_network_switch_routing_ospf: GET "/networks/{networkId}/switch/routing/ospf" (network_id);
        /// Update layer 3 OSPF routing configuration
        update_network_switch_routing_ospf: PUT "/networks/{networkId}/switch/routing/ospf" (network_id);
        /// Returns the switch network settings
        get_network_switch_settings: GET "/networks/{networkId}/switch/settings" (network_id);
        /// Update switch network settings
        update_network_switch_settings: PUT "/networks/{networkId}/switch/settings" (network_id);
        /// List the switch stacks in a network
        get_network_switch_stacks: GET "/networks/{networkId}/switch/stacks" (network_id);
        /// Create a stack
        create_network_switch_stack: POST "/networks/{networkId}/switch/stacks" (network_id, name, serials: Vec<String>);
        /// Show a switch stack
        get_network_switch_stack: GET "/networks/{networkId}/switch/stacks/{switchStackId}" (network_id, switch_stack_id);
        /// Delete a stack
        delete_network_switch_stack: DELETE "/networks/{networkId}/switch/stacks/{switchStackId}" (network_id, switch_stack_id);
        /// Add a switch to a stack
        add_network_switch_stack: POST "/networks/{networkId}/switch/stacks/{switchStackId}/add" (network_id, switch_stack_id, serial);
        /// Remove a switch from a stack
        remove_network_switch_stack: POST "/networks/{networkId}/switch/stacks/{switchStackId}/remove" (network_id, switch_stack_id, serial);
        /// List layer 3 interfaces for a switch stack
        get_network_switch_stack_routing_interfaces: GET "/networks/{networkId}/switch/stacks/{switchStackId}/routing/interfaces" (network_id, switch_stack_id);
        /// Create a layer 3 interface for a switch stack
        create_network_switch_stack_routing_interface: POST "/networks/{networkId}/switch/stacks/{switchStackId}/routing/interfaces" (network_id, switch_stack_id, name);
        /// Return a layer 3 interface from a switch stack
        get_network_switch_stack_routing_interface: GET "/networks/{networkId}/switch/stacks/{switchStackId}/routing/interfaces/{interfaceId}" (network_id, switch_stack_id, interface_id);
        /// Update a layer 3 interface for a switch stack
        update_network_switch_stack_routing_interface: PUT "/networks/{networkId}/switch/stacks/{switchStackId}/routing/interfaces/{interfaceId}" (network_id, switch_stack_id, interface_id);
        /// Delete a layer 3 interface from a switch stack
        delete_network_switch_stack_routing_interface: DELETE "/networks/{networkId}/switch/stacks/{switchStackId}/routing/interfaces/{interfaceId}" (network_id, switch_stack_id, interface_id);
        /// Return a layer 3 interface DHCP configuration for a switch stack
        get_network_switch_stack_routing_interface_dhcp: GET "/networks/{networkId}/switch/stacks/{switchStackId}/routing/interfaces/{interfaceId}/dhcp" (network_id, switch_stack_id, interface_id);
        /// Update a layer 3 interface DHCP configuration for a switch stack
        update_network_switch_stack_routing_interface_dhcp: PUT "/networks/{networkId}/switch/stacks/{switchStackId}/routing/interfaces/{interfaceId}/dhcp" (network_id, switch_stack_id, interface_id);
        /// List layer 3 static routes for a switch stack
        get_network_switch_stack_routing_static_routes: GET "/networks/{networkId}/switch/stacks/{switchStackId}/routing/staticRoutes" (network_id, switch_stack_id);
        /// Create a layer 3 static route for a switch stack
        create_network_switch_stack_routing_static_route: POST "/networks/{networkId}/switch/stacks/{switchStackId}/routing/staticRoutes" (network_id, switch_stack_id, subnet, next_hop_ip);
        /// Return a layer 3 static route for a switch stack
        get_network_switch_stack_routing_static_route: GET "/networks/{networkId}/switch/stacks/{switchStackId}/routing/staticRoutes/{staticRouteId}" (network_id, switch_stack_id, static_route_id);
        /// Update a layer 3 static route for a switch stack
        update_network_switch_stack_routing_static_route: PUT "/networks/{networkId}/switch/stacks/{switchStackId}/routing/staticRoutes/{staticRouteId}" (network_id, switch_stack_id, static_route_id);
        /// Delete a layer 3 static route for a switch stack
        delete_network_switch_stack_routing_static_route: DELETE "/networks/{networkId}/switch/stacks/{switchStackId}/routing/staticRoutes/{staticRouteId}" (network_id, switch_stack_id, static_route_id);
        /// Return the storm control configuration for a switch network
        get_network_switch_storm_control: GET "/networks/{networkId}/switch/stormControl" (network_id);
        /// Update the storm control configuration for a switch network
        update_network_switch_storm_control: PUT "/networks/{networkId}/switch/stormControl" (network_id);
        /// Returns STP settings
        get_network_switch_stp: GET "/networks/{networkId}/switch/stp" (network_id);
        /// Updates STP settings
        update_network_switch_stp: PUT "/networks/{networkId}/switch/stp" (network_id);
        /// List the switch templates for your switch template configuration
        get_organization_config_template_switch_profiles: GET "/organizations/{organizationId}/configTemplates/{configTemplateId}/switch/profiles" (organization_id, config_template_id);
        /// Return all the ports of a switch template
        get_organization_config_template_switch_profile_ports: GET "/organizations/{organizationId}/configTemplates/{configTemplateId}/switch/profiles/{profileId}/ports" (organization_id, config_template_id, profile_id);
        /// Return a switch template port
        get_organization_config_template_switch_profile_port: GET "/organizations/{organizationId}/configTemplates/{configTemplateId}/switch/profiles/{profileId}/ports/{portId}" (organization_id, config_template_id, profile_id, port_id);
        /// Update a switch template port
        update_organization_config_template_switch_profile_port: PUT "/organizations/{organizationId}/configTemplates/{configTemplateId}/switch/profiles/{profileId}/ports/{portId}" (organization_id, config_template_id, profile_id, port_id);
        /// Clone port-level and some switch-level configuration settings from a source switch to one or more target switches
        clone_organization_switch_devices: POST "/organizations/{organizationId}/switch/devices/clone" (organization_id, source_serial, target_serials: Vec<String>);
        /// List the switchports in an organization by switch
        get_organization_switch_ports_by_switch: GET "/organizations/{organizationId}/switch/ports/bySwitch" (organization_id) paged(Next);
        /// Returns the counts of all active ports for the requested timespan, grouped by speed
        get_organization_switch_ports_overview: GET "/organizations/{organizationId}/switch/ports/overview" (organization_id);
        /// List the switchports in an organization
        get_organization_switch_ports_statuses_by_switch: GET "/organizations/{organizationId}/switch/ports/statuses/bySwitch" (organization_id) paged(Next);
        /// List most recently seen LLDP/CDP discovery and topology information per switch port in an organization
        get_organization_switch_ports_topology_discovery_by_device: GET "/organizations/{organizationId}/switch/ports/topology/discovery/byDevice" (organization_id) paged(Next);
    }

    "wireless" {
        /// Return the bluetooth settings for a wireless device
        get_device_wireless_bluetooth_settings: GET "/devices/{serial}/wireless/bluetooth/settings" (serial);
        /// Update the bluetooth settings for a wireless device
        update_device_wireless_bluetooth_settings: PUT "/devices/{serial}/wireless/bluetooth/settings" (serial);
        /// Aggregated connectivity info for a given AP on this network
        get_device_wireless_connection_stats: GET "/devices/{serial}/wireless/connectionStats" (serial);
        /// Return the ESL settings of a device
        get_device_wireless_electronic_shelf_label: GET "/devices/{serial}/wireless/electronicShelfLabel" (serial);
        /// Update the ESL settings of a device
        update_device_wireless_electronic_shelf_label: PUT "/devices/{serial}/wireless/electronicShelfLabel" (serial);
        /// Aggregated latency info for a given AP on this network
        get_device_wireless_latency_stats: GET "/devices/{serial}/wireless/latencyStats" (serial);
        /// Return the radio settings of a device
        get_device_wireless_radio_settings: GET "/devices/{serial}/wireless/radio/settings" (serial);
        /// Update the radio settings of a device
        update_device_wireless_radio_settings: PUT "/devices/{serial}/wireless/radio/settings" (serial);
        /// Return the SSID statuses of an access point
        get_device_wireless_status: GET "/devices/{serial}/wireless/status" (serial);
        /// List Air Marshal scan results from a network
        get_network_wireless_air_marshal: GET "/networks/{networkId}/wireless/airMarshal" (network_id);
        /// Creates a new rule
        create_network_wireless_air_marshal_rule: POST "/networks/{networkId}/wireless/airMarshal/rules" (network_id);
        /// Update a rule
        update_network_wireless_air_marshal_rule: PUT "/networks/{networkId}/wireless/airMarshal/rules/{ruleId}" (network_id, rule_id);
        /// Delete an Air Marshal rule
        delete_network_wireless_air_marshal_rule: DELETE "/networks/{networkId}/wireless/airMarshal/rules/{ruleId}" (network_id, rule_id);
        /// Updates Air Marshal settings
        update_network_wireless_air_marshal_settings: PUT "/networks/{networkId}/wireless/airMarshal/settings" (network_id, default_policy);
        /// Return alternate management IPv6 interface settings for wireless devices
        get_network_wireless_alternate_management_interface_ipv6: GET "/networks/{networkId}/wireless/alternateManagementInterfaceIpv6" (network_id);
        /// Update alternate management IPv6 interface settings for wireless devices
        update_network_wireless_alternate_management_interface_ipv6: PUT "/networks/{networkId}/wireless/alternateManagementInterfaceIpv6" (network_id);
        /// Return the billing settings of this network
        get_network_wireless_billing: GET "/networks/{networkId}/wireless/billing" (network_id);
        /// Update the billing settings
        update_network_wireless_billing: PUT "/networks/{networkId}/wireless/billing" (network_id);
        /// Return the Bluetooth settings for a network
        get_network_wireless_bluetooth_settings: GET "/networks/{networkId}/wireless/bluetooth/settings" (network_id);
        /// Update the Bluetooth settings for a network
        update_network_wireless_bluetooth_settings: PUT "/networks/{networkId}/wireless/bluetooth/settings" (network_id);
        /// Return AP channel utilization over time for a device or network client
        get_network_wireless_channel_utilization_history: GET "/networks/{networkId}/wireless/channelUtilizationHistory" (network_id);
        /// Return wireless client counts over time for a network, device, or network client
        get_network_wireless_client_count_history: GET "/networks/{networkId}/wireless/clientCountHistory" (network_id);
        /// Aggregated connectivity info for this network, grouped by clients
        get_network_wireless_clients_connection_stats: GET "/networks/{networkId}/wireless/clients/connectionStats" (network_id);
        /// Aggregated latency info for this network, grouped by clients
        get_network_wireless_clients_latency_stats: GET "/networks/{networkId}/wireless/clients/latencyStats" (network_id);
        /// Aggregated connectivity info for a given client on this network
        get_network_wireless_client_connection_stats: GET "/networks/{networkId}/wireless/clients/{clientId}/connectionStats" (network_id, client_id);
        /// List the wireless connectivity events for a client within a network in the timespan
        get_network_wireless_client_connectivity_events: GET "/networks/{networkId}/wireless/clients/{clientId}/connectivityEvents" (network_id, client_id) paged(Next);
        /// Return the latency history for a client
        get_network_wireless_client_latency_history: GET "/networks/{networkId}/wireless/clients/{clientId}/latencyHistory" (network_id, client_id);
        /// Aggregated latency info for a given client on this network
        get_network_wireless_client_latency_stats: GET "/networks/{networkId}/wireless/clients/{clientId}/latencyStats" (network_id, client_id);
        /// Aggregated connectivity info for this network
        get_network_wireless_connection_stats: GET "/networks/{networkId}/wireless/connectionStats" (network_id);
        /// Return PHY data rates over time for a network, device, or network client
        get_network_wireless_data_rate_history: GET "/networks/{networkId}/wireless/dataRateHistory" (network_id);
        /// Aggregated connectivity info for this network, grouped by node
        get_network_wireless_devices_connection_stats: GET "/networks/{networkId}/wireless/devices/connectionStats" (network_id);
        /// Aggregated latency info for this network, grouped by node
        get_network_wireless_devices_latency_stats: GET "/networks/{networkId}/wireless/devices/latencyStats" (network_id);
        /// Return the ESL settings of a wireless network
        get_network_wireless_electronic_shelf_label: GET "/networks/{networkId}/wireless/electronicShelfLabel" (network_id);
        /// Update the ESL settings of a wireless network
        update_network_wireless_electronic_shelf_label: PUT "/networks/{networkId}/wireless/electronicShelfLabel" (network_id);
        /// Get a list of all ESL eligible devices of a network
        get_network_wireless_electronic_shelf_label_configured_devices: GET "/networks/{networkId}/wireless/electronicShelfLabel/configuredDevices" (network_id);
        /// List the AP port profiles for this network
        get_network_wireless_ethernet_ports_profiles: GET "/networks/{networkId}/wireless/ethernet/ports/profiles" (network_id);
        /// Create an AP port profile
        create_network_wireless_ethernet_ports_profile: POST "/networks/{networkId}/wireless/ethernet/ports/profiles" (network_id, name, ports: serde_json::Value);
        /// Assign AP port profile to list of APs
        assign_network_wireless_ethernet_ports_profiles: POST "/networks/{networkId}/wireless/ethernet/ports/profiles/assign" (network_id, serials: Vec<String>, profile_id);
        /// Set the AP port profile to be default for this network
        set_network_wireless_ethernet_ports_profiles_default: POST "/networks/{networkId}/wireless/ethernet/ports/profiles/setDefault" (network_id, profile_id);
        /// Show the AP port profile by ID for this network
        get_network_wireless_ethernet_ports_profile: GET "/networks/{networkId}/wireless/ethernet/ports/profiles/{profileId}" (network_id, profile_id);
        /// Update the AP port profile by ID for this network
        update_network_wireless_ethernet_ports_profile: PUT "/networks/{networkId}/wireless/ethernet/ports/profiles/{profileId}" (network_id, profile_id);
        /// Delete an AP port profile
        delete_network_wireless_ethernet_ports_profile: DELETE "/networks/{networkId}/wireless/ethernet/ports/profiles/{profileId}" (network_id, profile_id);
        /// List of all failed client connection events on this network in a given time range
        get_network_wireless_failed_connections: GET "/networks/{networkId}/wireless/failedConnections" (network_id);
        /// Return average wireless latency over time for a network, device, or network client
        get_network_wireless_latency_history: GET "/networks/{networkId}/wireless/latencyHistory" (network_id);
        /// Aggregated latency info for this network
        get_network_wireless_latency_stats: GET "/networks/{networkId}/wireless/latencyStats" (network_id);
        /// List wireless mesh statuses for repeaters
        get_network_wireless_mesh_statuses: GET "/networks/{networkId}/wireless/meshStatuses" (network_id) paged(Next);
        /// List RF profiles for this network
        get_network_wireless_rf_profiles: GET "/networks/{networkId}/wireless/rfProfiles" (network_id);
        /// Creates new RF profile for this network
        create_network_wireless_rf_profile: POST "/networks/{networkId}/wireless/rfProfiles" (network_id, name, band_selection_type);
        /// Return a RF profile
        get_network_wireless_rf_profile: GET "/networks/{networkId}/wireless/rfProfiles/{rfProfileId}" (network_id, rf_profile_id);
        /// Updates specified RF profile for this network
        update_network_wireless_rf_profile: PUT "/networks/{networkId}/wireless/rfProfiles/{rfProfileId}" (network_id, rf_profile_id);
        /// Delete a RF Profile
        delete_network_wireless_rf_profile: DELETE "/networks/{networkId}/wireless/rfProfiles/{rfProfileId}" (network_id, rf_profile_id);
        /// Return the wireless settings for a network
        get_network_wireless_settings: GET "/networks/{networkId}/wireless/settings" (network_id);
        /// Update the wireless settings for a network
        update_network_wireless_settings: PUT "/networks/{networkId}/wireless/settings" (network_id);
        /// Return signal quality (SNR/RSSI) over time for a device or network client
        get_network_wireless_signal_quality_history: GET "/networks/{networkId}/wireless/signalQualityHistory" (network_id);
        /// List the MR SSIDs in a network
        get_network_wireless_ssids: GET "/networks/{networkId}/wireless/ssids" (network_id);
        /// Return a single MR SSID
        get_network_wireless_ssid: GET "/networks/{networkId}/wireless/ssids/{number}" (network_id, number);
        /// Update the attributes of an MR SSID
        update_network_wireless_ssid: PUT "/networks/{networkId}/wireless/ssids/{number}" (network_id, number);
        /// List the Bonjour forwarding setting and rules for the SSID
        get_network_wireless_ssid_bonjour_forwarding: GET "/networks/{networkId}/wireless/ssids/{number}/bonjourForwarding" (network_id, number);
        /// Update the bonjour forwarding setting and rules for the SSID
        update_network_wireless_ssid_bonjour_forwarding: PUT "/networks/{networkId}/wireless/ssids/{number}/bonjourForwarding" (network_id, number);
        /// List the device type group policies for the SSID
        get_network_wireless_ssid_device_type_group_policies: GET "/networks/{networkId}/wireless/ssids/{number}/deviceTypeGroupPolicies" (network_id, number);
        /// Update the device type group policies for the SSID
        update_network_wireless_ssid_device_type_group_policies: PUT "/networks/{networkId}/wireless/ssids/{number}/deviceTypeGroupPolicies" (network_id, number);
        /// Return the EAP overridden parameters for an SSID
        get_network_wireless_ssid_eap_override: GET "/networks/{networkId}/wireless/ssids/{number}/eapOverride" (network_id, number);
        /// Update the EAP overridden parameters for an SSID
        update_network_wireless_ssid_eap_override: PUT "/networks/{networkId}/wireless/ssids/{number}/eapOverride" (network_id, number);
        /// Return the L3 firewall rules for an SSID on an MR network
        get_network_wireless_ssid_firewall_l3_firewall_rules: GET "/networks/{networkId}/wireless/ssids/{number}/firewall/l3FirewallRules" (network_id, number);
        /// Update the L3 firewall rules of an SSID on an MR network
        update_network_wireless_ssid_firewall_l3_firewall_rules: PUT "/networks/{networkId}/wireless/ssids/{number}/firewall/l3FirewallRules" (network_id, number);
        /// Return the L7 firewall rules for an SSID on an MR network
        get_network_wireless_ssid_firewall_l7_firewall_rules: GET "/networks/{networkId}/wireless/ssids/{number}/firewall/l7FirewallRules" (network_id, number);
        /// Update the L7 firewall rules of an SSID on an MR network
        update_network_wireless_ssid_firewall_l7_firewall_rules: PUT "/networks/{networkId}/wireless/ssids/{number}/firewall/l7FirewallRules" (network_id, number);
        /// Return the Hotspot 2.0 settings for an SSID
        get_network_wireless_ssid_hotspot20: GET "/networks/{networkId}/wireless/ssids/{number}/hotspot20" (network_id, number);
        /// Update the Hotspot 2.0 settings of an SSID
        update_network_wireless_ssid_hotspot20: PUT "/networks/{networkId}/wireless/ssids/{number}/hotspot20" (network_id, number);
        /// List all Identity PSKs in a wireless network
        get_network_wireless_ssid_identity_psks: GET "/networks/{networkId}/wireless/ssids/{number}/identityPsks" (network_id, number);
        /// Create an Identity PSK
        create_network_wireless_ssid_identity_psk: POST "/networks/{networkId}/wireless/ssids/{number}/identityPsks" (network_id, number, name, group_policy_id);
        /// Return an Identity PSK
        get_network_wireless_ssid_identity_psk: GET "/networks/{networkId}/wireless/ssids/{number}/identityPsks/{identityPskId}" (network_id, number, identity_psk_id);
        /// Update an Identity PSK
        update_network_wireless_ssid_identity_psk: PUT "/networks/{networkId}/wireless/ssids/{number}/identityPsks/{identityPskId}" (network_id, number, identity_psk_id);
        /// Delete an Identity PSK
        delete_network_wireless_ssid_identity_psk: DELETE "/networks/{networkId}/wireless/ssids/{number}/identityPsks/{identityPskId}" (network_id, number, identity_psk_id);
        /// List the outage schedule for the SSID
        get_network_wireless_ssid_schedules: GET "/networks/{networkId}/wireless/ssids/{number}/schedules" (network_id, number);
        /// Update the outage schedule for the SSID
        update_network_wireless_ssid_schedules: PUT "/networks/{networkId}/wireless/ssids/{number}/schedules" (network_id, number);
        /// Display the splash page settings for the given SSID
        get_network_wireless_ssid_splash_settings: GET "/networks/{networkId}/wireless/ssids/{number}/splash/settings" (network_id, number);
        /// Modify the splash page settings for the given SSID
        update_network_wireless_ssid_splash_settings: PUT "/networks/{networkId}/wireless/ssids/{number}/splash/settings" (network_id, number);
        /// Display the traffic shaping settings for a SSID on an MR network
        get_network_wireless_ssid_traffic_shaping_rules: GET "/networks/{networkId}/wireless/ssids/{number}/trafficShaping/rules" (network_id, number);
        /// Update the traffic shaping settings for an SSID on an MR network
        update_network_wireless_ssid_traffic_shaping_rules: PUT "/networks/{networkId}/wireless/ssids/{number}/trafficShaping/rules" (network_id, number);
        /// List the VPN settings for the SSID
        get_network_wireless_ssid_vpn: GET "/networks/{networkId}/wireless/ssids/{number}/vpn" (network_id, number);
        /// Update the VPN settings for the SSID
        update_network_wireless_ssid_vpn: PUT "/networks/{networkId}/wireless/ssids/{number}/vpn" (network_id, number);
        /// Return AP usage over time for a device or network client
        get_network_wireless_usage_history: GET "/networks/{networkId}/wireless/usageHistory" (network_id);
        /// Returns the current Air Marshal rules in this organization
        get_organization_wireless_air_marshal_rules: GET "/organizations/{organizationId}/wireless/airMarshal/rules" (organization_id) paged(Next);
        /// Returns the current Air Marshal settings for this network
        get_organization_wireless_air_marshal_settings_by_network: GET "/organizations/{organizationId}/wireless/airMarshal/settings/byNetwork" (organization_id) paged(Next);
        /// List access point client count at the moment in an organization
        get_organization_wireless_clients_overview_by_device: GET "/organizations/{organizationId}/wireless/clients/overview/byDevice" (organization_id) paged(Next);
        /// Get average channel utilization for all bands in a network, split by AP
        get_organization_wireless_devices_channel_utilization_by_device: GET "/organizations/{organizationId}/wireless/devices/channelUtilization/byDevice" (organization_id) paged(Next);
        /// Get average channel utilization across all bands for all networks in the organization
        get_organization_wireless_devices_channel_utilization_by_network: GET "/organizations/{organizationId}/wireless/devices/channelUtilization/byNetwork" (organization_id) paged(Next);
        /// Get a time-series of average channel utilization for all bands, segmented by device
        get_organization_wireless_devices_channel_utilization_history_by_device_by_interval: GET "/organizations/{organizationId}/wireless/devices/channelUtilization/history/byDevice/byInterval" (organization_id) paged(Next);
        /// Get a time-series of average channel utilization for all bands
        get_organization_wireless_devices_channel_utilization_history_by_network_by_interval: GET "/organizations/{organizationId}/wireless/devices/channelUtilization/history/byNetwork/byInterval" (organization_id) paged(Next);
        /// List the most recent Ethernet link speed, duplex, aggregation and power mode and status information for wireless devices
        get_organization_wireless_devices_ethernet_statuses: GET "/organizations/{organizationId}/wireless/devices/ethernet/statuses" (organization_id) paged(Next);
        /// Get average packet loss for the given timespan for all clients in the organization
        get_organization_wireless_devices_packet_loss_by_client: GET "/organizations/{organizationId}/wireless/devices/packetLoss/byClient" (organization_id) paged(Next);
        /// Get average packet loss for the given timespan for all devices in the organization
        get_organization_wireless_devices_packet_loss_by_device: GET "/organizations/{organizationId}/wireless/devices/packetLoss/byDevice" (organization_id) paged(Next);
        /// Get average packet loss for the given timespan for all networks in the organization
        get_organization_wireless_devices_packet_loss_by_network: GET "/organizations/{organizationId}/wireless/devices/packetLoss/byNetwork" (organization_id) paged(Next);
        /// List of Catalyst access points information
        get_organization_wireless_devices_wireless_controllers_by_device: GET "/organizations/{organizationId}/wireless/devices/wirelessControllers/byDevice" (organization_id) paged(Next);
        /// List the RF profiles of an organization by device
        get_organization_wireless_rf_profiles_assignments_by_device: GET "/organizations/{organizationId}/wireless/rfProfiles/assignments/byDevice" (organization_id) paged(Next);
        /// List status information of all BSSIDs in your organization
        get_organization_wireless_ssids_statuses_by_device: GET "/organizations/{organizationId}/wireless/ssids/statuses/byDevice" (organization_id) paged(Next);
    }

    "camera" {
        /// Returns live state from camera analytics zones
        get_device_camera_analytics_live: GET "/devices/{serial}/camera/analytics/live" (serial);
        /// Returns an overview of aggregate analytics data for a timespan
        get_device_camera_analytics_overview: GET "/devices/{serial}/camera/analytics/overview" (serial);
        /// Returns most recent record for analytics zones
        get_device_camera_analytics_recent: GET "/devices/{serial}/camera/analytics/recent" (serial);
        /// Returns all configured analytic zones for this camera
        get_device_camera_analytics_zones: GET "/devices/{serial}/camera/analytics/zones" (serial);
        /// Return historical records for analytic zones
        get_device_camera_analytics_zone_history: GET "/devices/{serial}/camera/analytics/zones/{zoneId}/history" (serial, zone_id);
        /// Return custom analytics settings for a camera
        get_device_camera_custom_analytics: GET "/devices/{serial}/camera/customAnalytics" (serial);
        /// Update custom analytics settings for a camera
        update_device_camera_custom_analytics: PUT "/devices/{serial}/camera/customAnalytics" (serial);
        /// Generate a snapshot of what the camera sees at the specified time and return a link to that image
        generate_device_camera_snapshot: POST "/devices/{serial}/camera/generateSnapshot" (serial);
        /// Returns quality and retention settings for the given camera
        get_device_camera_quality_and_retention: GET "/devices/{serial}/camera/qualityAndRetention" (serial);
        /// Update quality and retention settings for the given camera
        update_device_camera_quality_and_retention: PUT "/devices/{serial}/camera/qualityAndRetention" (serial);
        /// Returns sense settings for a given camera
        get_device_camera_sense: GET "/devices/{serial}/camera/sense" (serial);
        /// Update sense settings for the given camera
        update_device_camera_sense: PUT "/devices/{serial}/camera/sense" (serial);
        /// Returns the MV Sense object detection model list for the given camera
        get_device_camera_sense_object_detection_models: GET "/devices/{serial}/camera/sense/objectDetectionModels" (serial);
        /// Returns video settings for the given camera
        get_device_camera_video_settings: GET "/devices/{serial}/camera/video/settings" (serial);
        /// Update video settings for the given camera
        update_device_camera_video_settings: PUT "/devices/{serial}/camera/video/settings" (serial);
        /// Returns video link to the specified camera
        get_device_camera_video_link: GET "/devices/{serial}/camera/videoLink" (serial);
        /// Returns wireless profile assigned to the given camera
        get_device_camera_wireless_profiles: GET "/devices/{serial}/camera/wirelessProfiles" (serial);
        /// Assign wireless profiles to the given camera
        update_device_camera_wireless_profiles: PUT "/devices/{serial}/camera/wirelessProfiles" (serial, ids: serde_json::Value);
        /// List the quality retention profiles for this network
        get_network_camera_quality_retention_profiles: GET "/networks/{networkId}/camera/qualityRetentionProfiles" (network_id);
        /// Creates new quality retention profile for this network
        create_network_camera_quality_retention_profile: POST "/networks/{networkId}/camera/qualityRetentionProfiles" (network_id, name);
        /// Retrieve a single quality retention profile
        get_network_camera_quality_retention_profile: GET "/networks/{networkId}/camera/qualityRetentionProfiles/{qualityRetentionProfileId}" (network_id, quality_retention_profile_id);
        /// Update an existing quality retention profile for this network
        update_network_camera_quality_retention_profile: PUT "/networks/{networkId}/camera/qualityRetentionProfiles/{qualityRetentionProfileId}" (network_id, quality_retention_profile_id);
        /// Delete an existing quality retention profile for this network
        delete_network_camera_quality_retention_profile: DELETE "/networks/{networkId}/camera/qualityRetentionProfiles/{qualityRetentionProfileId}" (network_id, quality_retention_profile_id);
        /// Returns a list of all camera recording schedules
        get_network_camera_schedules: GET "/networks/{networkId}/camera/schedules" (network_id);
        /// List the camera wireless profiles for this network
        get_network_camera_wireless_profiles: GET "/networks/{networkId}/camera/wirelessProfiles" (network_id);
        /// Creates a new camera wireless profile for this network
        create_network_camera_wireless_profile: POST "/networks/{networkId}/camera/wirelessProfiles" (network_id, name, ssid: serde_json::Value);
        /// Retrieve a single camera wireless profile
        get_network_camera_wireless_profile: GET "/networks/{networkId}/camera/wirelessProfiles/{wirelessProfileId}" (network_id, wireless_profile_id);
        /// Update an existing camera wireless profile in this network
        update_network_camera_wireless_profile: PUT "/networks/{networkId}/camera/wirelessProfiles/{wirelessProfileId}" (network_id, wireless_profile_id);
        /// Delete an existing camera wireless profile for this network
        delete_network_camera_wireless_profile: DELETE "/networks/{networkId}/camera/wirelessProfiles/{wirelessProfileId}" (network_id, wireless_profile_id);
        /// List Custom Analytics Artifacts
        get_organization_camera_custom_analytics_artifacts: GET "/organizations/{organizationId}/camera/customAnalytics/artifacts" (organization_id);
        /// Create custom analytics artifact
        create_organization_camera_custom_analytics_artifact: POST "/organizations/{organizationId}/camera/customAnalytics/artifacts" (organization_id);
        /// Get Custom Analytics Artifact
        get_organization_camera_custom_analytics_artifact: GET "/organizations/{organizationId}/camera/customAnalytics/artifacts/{artifactId}" (organization_id, artifact_id);
        /// Delete Custom Analytics Artifact
        delete_organization_camera_custom_analytics_artifact: DELETE "/organizations/{organizationId}/camera/customAnalytics/artifacts/{artifactId}" (organization_id, artifact_id);
        /// Fetch onboarding status of cameras
        get_organization_camera_onboarding_statuses: GET "/organizations/{organizationId}/camera/onboarding/statuses" (organization_id);
        /// Notify that credential handoff to camera has completed
        update_organization_camera_onboarding_statuses: PUT "/organizations/{organizationId}/camera/onboarding/statuses" (organization_id);
        /// List the permissions scopes for this organization
        get_organization_camera_permissions: GET "/organizations/{organizationId}/camera/permissions" (organization_id);
        /// Retrieve a single permission scope
        get_organization_camera_permission: GET "/organizations/{organizationId}/camera/permissions/{permissionScopeId}" (organization_id, permission_scope_id);
        /// List all the roles in this organization
        get_organization_camera_roles: GET "/organizations/{organizationId}/camera/roles" (organization_id);
        /// Creates new role for this organization
        create_organization_camera_role: POST "/organizations/{organizationId}/camera/roles" (organization_id, name);
        /// Retrieve a single role
        get_organization_camera_role: GET "/organizations/{organizationId}/camera/roles/{roleId}" (organization_id, role_id);
        /// Update an existing role in this organization
        update_organization_camera_role: PUT "/organizations/{organizationId}/camera/roles/{roleId}" (organization_id, role_id);
        /// Delete an existing role for this organization
        delete_organization_camera_role: DELETE "/organizations/{organizationId}/camera/roles/{roleId}" (organization_id, role_id);
    }

    "sensor" {
        /// Returns a historical log of all commands
        get_device_sensor_commands: GET "/devices/{serial}/sensor/commands" (serial) paged(Next);
        /// Sends a command to a sensor
        create_device_sensor_command: POST "/devices/{serial}/sensor/commands" (serial, operation);
        /// Returns information about the command's execution, including the status
        get_device_sensor_command: GET "/devices/{serial}/sensor/commands/{commandId}" (serial, command_id);
        /// List the sensor roles for a given sensor or camera device
        get_device_sensor_relationships: GET "/devices/{serial}/sensor/relationships" (serial);
        /// Assign one or more sensor roles to a given sensor or camera device
        update_device_sensor_relationships: PUT "/devices/{serial}/sensor/relationships" (serial);
        /// Return an overview of currently alerting sensors by metric
        get_network_sensor_alerts_current_overview_by_metric: GET "/networks/{networkId}/sensor/alerts/current/overview/byMetric" (network_id);
        /// Return an overview of alert occurrences over a timespan, by metric
        get_network_sensor_alerts_overview_by_metric: GET "/networks/{networkId}/sensor/alerts/overview/byMetric" (network_id);
        /// Lists all sensor alert profiles for a network
        get_network_sensor_alerts_profiles: GET "/networks/{networkId}/sensor/alerts/profiles" (network_id);
        /// Creates a sensor alert profile for a network
        create_network_sensor_alerts_profile: POST "/networks/{networkId}/sensor/alerts/profiles" (network_id, name, conditions: serde_json::Value);
        /// Show details of a sensor alert profile for a network
        get_network_sensor_alerts_profile: GET "/networks/{networkId}/sensor/alerts/profiles/{id}" (network_id, id);
        /// Updates a sensor alert profile for a network
        update_network_sensor_alerts_profile: PUT "/networks/{networkId}/sensor/alerts/profiles/{id}" (network_id, id);
        /// Deletes a sensor alert profile from a network
        delete_network_sensor_alerts_profile: DELETE "/networks/{networkId}/sensor/alerts/profiles/{id}" (network_id, id);
        /// List the sensor settings of all MQTT brokers for this network
        get_network_sensor_mqtt_brokers: GET "/networks/{networkId}/sensor/mqttBrokers" (network_id);
        /// Return the sensor settings of an MQTT broker
        get_network_sensor_mqtt_broker: GET "/networks/{networkId}/sensor/mqttBrokers/{mqttBrokerId}" (network_id, mqtt_broker_id);
        /// Update the sensor settings of an MQTT broker
        update_network_sensor_mqtt_broker: PUT "/networks/{networkId}/sensor/mqttBrokers/{mqttBrokerId}" (network_id, mqtt_broker_id, enabled: bool);
        /// List the sensor roles for devices in a given network
        get_network_sensor_relationships: GET "/networks/{networkId}/sensor/relationships" (network_id);
        /// Return all reported readings from sensors in a given timespan, sorted by timestamp
        get_organization_sensor_readings_history: GET "/organizations/{organizationId}/sensor/readings/history" (organization_id) paged(Next);
        /// Return the latest available reading for each metric from each sensor, sorted by sensor serial
        get_organization_sensor_readings_latest: GET "/organizations/{organizationId}/sensor/readings/latest" (organization_id) paged(Next);
    }

    "sm" {
        /// Bypass activation lock attempt
        create_network_sm_bypass_activation_lock_attempt: POST "/networks/{networkId}/sm/bypassActivationLockAttempts" (network_id, ids: Vec<String>);
        /// Bypass activation lock attempt status
        get_network_sm_bypass_activation_lock_attempt: GET "/networks/{networkId}/sm/bypassActivationLockAttempts/{attemptId}" (network_id, attempt_id);
        /// List the devices enrolled in an SM network with various specified fields and filters
        get_network_sm_devices: GET "/networks/{networkId}/sm/devices" (network_id) paged(Next);
        /// Force check-in a set of devices
        checkin_network_sm_devices: POST "/networks/{networkId}/sm/devices/checkin" (network_id);
        /// Modify the fields of a device
        update_network_sm_devices_fields: PUT "/networks/{networkId}/sm/devices/fields" (network_id, device_fields: serde_json::Value);
        /// Lock a set of devices
        lock_network_sm_devices: POST "/networks/{networkId}/sm/devices/lock" (network_id);
        /// Add, delete, or update the tags of a set of devices
        modify_network_sm_devices_tags: POST "/networks/{networkId}/sm/devices/modifyTags" (network_id, tags: Vec<String>, update_action);
        /// Move a set of devices to a new network
        move_network_sm_devices: POST "/networks/{networkId}/sm/devices/move" (network_id, new_network);
        /// Wipe a device
        wipe_network_sm_devices: POST "/networks/{networkId}/sm/devices/wipe" (network_id);
        /// List the apps installed on a device
        get_network_sm_device_apps: GET "/networks/{networkId}/sm/devices/{deviceId}/apps" (network_id, device_id);
        /// Return the client's daily cellular data usage history
        get_network_sm_device_cellular_usage_history: GET "/networks/{networkId}/sm/devices/{deviceId}/cellularUsageHistory" (network_id, device_id);
        /// List the certs on a device
        get_network_sm_device_certs: GET "/networks/{networkId}/sm/devices/{deviceId}/certs" (network_id, device_id);
        /// Returns historical connectivity data (whether a device is regularly checking in to Dashboard)
        get_network_sm_device_connectivity: GET "/networks/{networkId}/sm/devices/{deviceId}/connectivity" (network_id, device_id) paged(Next);
        /// Return historical records of various Systems Manager network connection details for desktop devices
        get_network_sm_device_desktop_logs: GET "/networks/{networkId}/sm/devices/{deviceId}/desktopLogs" (network_id, device_id) paged(Next);
        /// Return historical records of commands sent to Systems Manager devices
        get_network_sm_device_device_command_logs: GET "/networks/{networkId}/sm/devices/{deviceId}/deviceCommandLogs" (network_id, device_id) paged(Next);
        /// Get the installed profiles associated with a device
        get_network_sm_device_device_profiles: GET "/networks/{networkId}/sm/devices/{deviceId}/deviceProfiles" (network_id, device_id);
        /// Install applications on a device
        install_network_sm_device_apps: POST "/networks/{networkId}/sm/devices/{deviceId}/installApps" (network_id, device_id, app_ids: Vec<String>);
        /// List the network adapters of a device
        get_network_sm_device_network_adapters: GET "/networks/{networkId}/sm/devices/{deviceId}/networkAdapters" (network_id, device_id);
        /// Return historical records of various Systems Manager client metrics for desktop devices
        get_network_sm_device_performance_history: GET "/networks/{networkId}/sm/devices/{deviceId}/performanceHistory" (network_id, device_id) paged(Next);
        /// Refresh the details of a device
        refresh_network_sm_device_details: POST "/networks/{networkId}/sm/devices/{deviceId}/refreshDetails" (network_id, device_id);
        /// List the restrictions on a device
        get_network_sm_device_restrictions: GET "/networks/{networkId}/sm/devices/{deviceId}/restrictions" (network_id, device_id);
        /// List the security centers on a device
        get_network_sm_device_security_centers: GET "/networks/{networkId}/sm/devices/{deviceId}/securityCenters" (network_id, device_id);
        /// Get a list of softwares associated with a device
        get_network_sm_device_softwares: GET "/networks/{networkId}/sm/devices/{deviceId}/softwares" (network_id, device_id);
        /// Unenroll a device
        unenroll_network_sm_device: POST "/networks/{networkId}/sm/devices/{deviceId}/unenroll" (network_id, device_id);
        /// Uninstall applications on a device
        uninstall_network_sm_device_apps: POST "/networks/{networkId}/sm/devices/{deviceId}/uninstallApps" (network_id, device_id, app_ids: Vec<String>);
        /// List the saved SSID names on a device
        get_network_sm_device_wlan_lists: GET "/networks/{networkId}/sm/devices/{deviceId}/wlanLists" (network_id, device_id);
        /// List all profiles in a network
        get_network_sm_profiles: GET "/networks/{networkId}/sm/profiles" (network_id);
        /// List the target groups in this network
        get_network_sm_target_groups: GET "/networks/{networkId}/sm/targetGroups" (network_id);
        /// Add a target group
        create_network_sm_target_group: POST "/networks/{networkId}/sm/targetGroups" (network_id);
        /// Return a target group
        get_network_sm_target_group: GET "/networks/{networkId}/sm/targetGroups/{targetGroupId}" (network_id, target_group_id);
        /// Update a target group
        update_network_sm_target_group: PUT "/networks/{networkId}/sm/targetGroups/{targetGroupId}" (network_id, target_group_id);
        /// Delete a target group from a network
        delete_network_sm_target_group: DELETE "/networks/{networkId}/sm/targetGroups/{targetGroupId}" (network_id, target_group_id);
        /// List Trusted Access Configs
        get_network_sm_trusted_access_configs: GET "/networks/{networkId}/sm/trustedAccessConfigs" (network_id) paged(Next);
        /// List User Access Devices and its Trusted Access Connections
        get_network_sm_user_access_devices: GET "/networks/{networkId}/sm/userAccessDevices" (network_id) paged(Next);
        /// Delete a User Access Device
        delete_network_sm_user_access_device: DELETE "/networks/{networkId}/sm/userAccessDevices/{userAccessDeviceId}" (network_id, user_access_device_id);
        /// List the owners in an SM network with various specified fields and filters
        get_network_sm_users: GET "/networks/{networkId}/sm/users" (network_id);
        /// Get the profiles associated with a user
        get_network_sm_user_device_profiles: GET "/networks/{networkId}/sm/users/{userId}/deviceProfiles" (network_id, user_id);
        /// Get a list of softwares associated with a user
        get_network_sm_user_softwares: GET "/networks/{networkId}/sm/users/{userId}/softwares" (network_id, user_id);
        /// List the Limited Access Roles for an organization
        get_organization_sm_admins_roles: GET "/organizations/{organizationId}/sm/admins/roles" (organization_id) paged(Next);
        /// Create a Limited Access Role
        create_organization_sm_admins_role: POST "/organizations/{organizationId}/sm/admins/roles" (organization_id, name);
        /// Return a Limited Access Role
        get_organization_sm_admins_role: GET "/organizations/{organizationId}/sm/admins/roles/{roleId}" (organization_id, role_id);
        /// Update a Limited Access Role
        update_organization_sm_admins_role: PUT "/organizations/{organizationId}/sm/admins/roles/{roleId}" (organization_id, role_id);
        /// Delete a Limited Access Role
        delete_organization_sm_admins_role: DELETE "/organizations/{organizationId}/sm/admins/roles/{roleId}" (organization_id, role_id);
        /// Get the organization's APNS certificate
        get_organization_sm_apns_cert: GET "/organizations/{organizationId}/sm/apnsCert" (organization_id);
        /// Update an Organizations Sentry Policies using the provided list
        update_organization_sm_sentry_policies_assignments: PUT "/organizations/{organizationId}/sm/sentry/policies/assignments" (organization_id, items: serde_json::Value);
        /// List the Sentry Policies for an organization ordered in ascending order of priority
        get_organization_sm_sentry_policies_assignments_by_network: GET "/organizations/{organizationId}/sm/sentry/policies/assignments/byNetwork" (organization_id) paged(Next);
        /// List the VPP accounts in the organization
        get_organization_sm_vpp_accounts: GET "/organizations/{organizationId}/sm/vppAccounts" (organization_id);
        /// Get a hash containing the unparsed token of the VPP account with the given ID
        get_organization_sm_vpp_account: GET "/organizations/{organizationId}/sm/vppAccounts/{vppAccountId}" (organization_id, vpp_account_id);
    }

    "cellularGateway" {
        /// Show the LAN Settings of a MG
        get_device_cellular_gateway_lan: GET "/devices/{serial}/cellularGateway/lan" (serial);
        /// Update the LAN Settings for a single MG
        update_device_cellular_gateway_lan: PUT "/devices/{serial}/cellularGateway/lan" (serial);
        /// Returns the port forwarding rules for a single MG
        get_device_cellular_gateway_port_forwarding_rules: GET "/devices/{serial}/cellularGateway/portForwardingRules" (serial);
        /// Updates the port forwarding rules for a single MG
        update_device_cellular_gateway_port_forwarding_rules: PUT "/devices/{serial}/cellularGateway/portForwardingRules" (serial);
        /// Return the connectivity testing destinations for an MG network
        get_network_cellular_gateway_connectivity_monitoring_destinations: GET "/networks/{networkId}/cellularGateway/connectivityMonitoringDestinations" (network_id);
        /// Update the connectivity testing destinations for an MG network
        update_network_cellular_gateway_connectivity_monitoring_destinations: PUT "/networks/{networkId}/cellularGateway/connectivityMonitoringDestinations" (network_id);
        /// List common DHCP settings of MGs
        get_network_cellular_gateway_dhcp: GET "/networks/{networkId}/cellularGateway/dhcp" (network_id);
        /// Update common DHCP settings of MGs
        update_network_cellular_gateway_dhcp: PUT "/networks/{networkId}/cellularGateway/dhcp" (network_id);
        /// Return the subnet pool and mask configured for MGs in the network
        get_network_cellular_gateway_subnet_pool: GET "/networks/{networkId}/cellularGateway/subnetPool" (network_id);
        /// Update the subnet pool and mask configuration for MGs in the network
        update_network_cellular_gateway_subnet_pool: PUT "/networks/{networkId}/cellularGateway/subnetPool" (network_id);
        /// Returns the uplink settings for your MG network
        get_network_cellular_gateway_uplink: GET "/networks/{networkId}/cellularGateway/uplink" (network_id);
        /// Updates the uplink settings for your MG network
        update_network_cellular_gateway_uplink: PUT "/networks/{networkId}/cellularGateway/uplink" (network_id);
        /// List the uplink status of every Meraki MG cellular gateway in the organization
        get_organization_cellular_gateway_uplink_statuses: GET "/organizations/{organizationId}/cellularGateway/uplink/statuses" (organization_id) paged(Next);
    }

    "insight" {
        /// Get application health by time
        get_network_insight_application_health_by_time: GET "/networks/{networkId}/insight/applications/{applicationId}/healthByTime" (network_id, application_id);
        /// List all Insight tracked applications
        get_organization_insight_applications: GET "/organizations/{organizationId}/insight/applications" (organization_id);
        /// List the monitored media servers for this organization
        get_organization_insight_monitored_media_servers: GET "/organizations/{organizationId}/insight/monitoredMediaServers" (organization_id);
        /// Add a media server to be monitored for this organization
        create_organization_insight_monitored_media_server: POST "/organizations/{organizationId}/insight/monitoredMediaServers" (organization_id, name, address);
        /// Return a monitored media server for this organization
        get_organization_insight_monitored_media_server: GET "/organizations/{organizationId}/insight/monitoredMediaServers/{monitoredMediaServerId}" (organization_id, monitored_media_server_id);
        /// Update a monitored media server for this organization
        update_organization_insight_monitored_media_server: PUT "/organizations/{organizationId}/insight/monitoredMediaServers/{monitoredMediaServerId}" (organization_id, monitored_media_server_id);
        /// Delete a monitored media server from this organization
        delete_organization_insight_monitored_media_server: DELETE "/organizations/{organizationId}/insight/monitoredMediaServers/{monitoredMediaServerId}" (organization_id, monitored_media_server_id);
    }

    "licensing" {
        /// List the licenses in a coterm organization
        get_organization_licensing_coterm_licenses: GET "/organizations/{organizationId}/licensing/coterm/licenses" (organization_id) paged(Next);
        /// Moves a license to a different organization (coterm only)
        move_organization_licensing_coterm_licenses: POST "/organizations/{organizationId}/licensing/coterm/licenses/move" (organization_id, destination: serde_json::Value, licenses: serde_json::Value);
    }

    "wirelessController" {
        /// List wireless LAN controller availability history
        get_organization_wireless_controller_availabilities_change_history: GET "/organizations/{organizationId}/wirelessController/availabilities/changeHistory" (organization_id) paged(Next);
        /// List wireless LAN controller layer 2 interfaces in an organization
        get_organization_wireless_controller_devices_interfaces_l2_by_device: GET "/organizations/{organizationId}/wirelessController/devices/interfaces/l2/byDevice" (organization_id) paged(Next);
        /// List wireless LAN controller layer 3 interfaces in an organization
        get_organization_wireless_controller_devices_interfaces_l3_by_device: GET "/organizations/{organizationId}/wirelessController/devices/interfaces/l3/byDevice" (organization_id) paged(Next);
        /// List the overview information of wireless LAN controllers in an organization
        get_organization_wireless_controller_overview_by_device: GET "/organizations/{organizationId}/wirelessController/overview/byDevice" (organization_id) paged(Next);
    }

    "administered" {
        /// Returns the identity of the current user
        get_administered_identities_me: GET "/administered/identities/me" ();
        /// List the non-sensitive metadata associated with the API keys that belong to the user
        get_administered_identities_me_api_keys: GET "/administered/identities/me/api/keys" ();
        /// Generates an API key for an identity
        generate_administered_identities_me_api_keys: POST "/administered/identities/me/api/keys/generate" ();
        /// Revokes an identity's API key, using the last four characters of the key
        revoke_administered_identities_me_api_keys: POST "/administered/identities/me/api/keys/{suffix}/revoke" (suffix);
    }
}
