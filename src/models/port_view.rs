#[derive(Clone, Debug)]
pub struct FixedIpView {
    pub ip_address: String,
    pub subnet_id: String,
}

#[derive(Clone, Debug)]
pub struct AddressPairView {
    pub ip_address: String,
    pub mac_address: String,
}

#[derive(Clone, Debug)]
pub struct PortView {
    pub id: String,
    pub name: String,
    pub status: String,
    pub status_display: String,
    pub network_id: String,
    pub mac_address: String,
    pub description: String,
    pub port_security_enabled: bool,
    pub created_display: String,
    pub fixed_ips: Vec<FixedIpView>,
    pub security_groups: Vec<String>,
    pub allowed_address_pairs: Vec<AddressPairView>,
}
