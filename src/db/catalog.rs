//! Built-in tool catalog loaded into every new store.

use crate::models::ToolStatus;
use crate::models::ToolStatus::{Active, Inactive};

pub struct CatalogEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub icon: &'static str,
    pub status: ToolStatus,
}

const fn entry(
    name: &'static str,
    description: &'static str,
    category: &'static str,
    icon: &'static str,
    status: ToolStatus,
) -> CatalogEntry {
    CatalogEntry {
        name,
        description,
        category,
        icon,
        status,
    }
}

pub const CATALOG: &[CatalogEntry] = &[
    // protection
    entry(
        "Wireshark",
        "Network protocol analyzer for deep packet inspection",
        "protection",
        "fas fa-network-wired",
        Active,
    ),
    entry(
        "Nmap",
        "Network discovery and security auditing tool",
        "protection",
        "fas fa-search",
        Active,
    ),
    entry(
        "Metasploit",
        "Penetration testing framework for security assessment",
        "protection",
        "fas fa-bug",
        Inactive,
    ),
    entry(
        "Burp Suite",
        "Web application security testing platform",
        "protection",
        "fas fa-globe",
        Active,
    ),
    entry(
        "OWASP ZAP",
        "Web application security scanner",
        "protection",
        "fas fa-shield-alt",
        Active,
    ),
    entry("Nikto", "Web server vulnerability scanner", "protection", "fas fa-server", Active),
    entry(
        "Aircrack-ng",
        "Wireless network security auditing tool suite",
        "protection",
        "fas fa-wifi",
        Inactive,
    ),
    entry(
        "John the Ripper",
        "Password security auditing and recovery tool",
        "protection",
        "fas fa-key",
        Active,
    ),
    entry(
        "Hashcat",
        "Advanced password recovery and hash cracking tool",
        "protection",
        "fas fa-lock-open",
        Active,
    ),
    entry(
        "Sqlmap",
        "Automatic SQL injection and database takeover tool",
        "protection",
        "fas fa-database",
        Active,
    ),
    entry(
        "Nessus",
        "Comprehensive vulnerability assessment solution",
        "protection",
        "fas fa-eye",
        Active,
    ),
    entry(
        "OpenVAS",
        "Open-source vulnerability assessment tool",
        "protection",
        "fas fa-search-plus",
        Active,
    ),
    entry(
        "Snort",
        "Network intrusion detection and prevention system",
        "protection",
        "fas fa-bell",
        Active,
    ),
    entry(
        "Suricata",
        "High-performance network security monitoring engine",
        "protection",
        "fas fa-tachometer-alt",
        Active,
    ),
    entry(
        "ClamAV",
        "Open-source antivirus engine for malware detection",
        "protection",
        "fas fa-virus-slash",
        Active,
    ),
    entry(
        "YARA",
        "Pattern matching engine for malware researchers",
        "protection",
        "fas fa-dna",
        Active,
    ),
    entry(
        "Volatility",
        "Advanced memory forensics framework",
        "protection",
        "fas fa-memory",
        Inactive,
    ),
    entry(
        "Autopsy",
        "Digital forensics platform for investigation",
        "protection",
        "fas fa-search-location",
        Active,
    ),
    entry(
        "TheHive",
        "Scalable security incident response platform",
        "protection",
        "fas fa-hive",
        Active,
    ),
    entry("MISP", "Malware information sharing platform", "protection", "fas fa-share-alt", Active),
    // privacy
    entry(
        "Tor Browser",
        "Anonymous web browsing through encrypted relay network",
        "privacy",
        "fas fa-user-secret",
        Active,
    ),
    entry(
        "Tails OS",
        "Amnesic incognito live operating system",
        "privacy",
        "fas fa-compact-disc",
        Active,
    ),
    entry(
        "Qubes OS",
        "Security-focused desktop operating system",
        "privacy",
        "fas fa-cubes",
        Active,
    ),
    entry(
        "Signal",
        "End-to-end encrypted messaging application",
        "privacy",
        "fas fa-comments",
        Active,
    ),
    entry(
        "ProtonMail",
        "Encrypted email service with zero-access encryption",
        "privacy",
        "fas fa-envelope-open-text",
        Active,
    ),
    entry(
        "Whonix",
        "Anonymous operating system preventing IP leaks",
        "privacy",
        "fas fa-mask",
        Active,
    ),
    entry(
        "I2P",
        "Anonymous network layer for secure communications",
        "privacy",
        "fas fa-route",
        Inactive,
    ),
    entry(
        "Freenet",
        "Decentralized peer-to-peer platform",
        "privacy",
        "fas fa-project-diagram",
        Active,
    ),
    entry(
        "Ricochet",
        "Anonymous instant messaging over Tor",
        "privacy",
        "fas fa-paper-plane",
        Inactive,
    ),
    entry(
        "OnionShare",
        "Secure and anonymous file sharing tool",
        "privacy",
        "fas fa-share",
        Active,
    ),
    entry("Veracrypt", "Strong disk encryption software", "privacy", "fas fa-lock", Active),
    entry(
        "GnuPG",
        "Complete and free implementation of OpenPGP standard",
        "privacy",
        "fas fa-fingerprint",
        Active,
    ),
    entry(
        "KeePass",
        "Secure password manager with strong encryption",
        "privacy",
        "fas fa-key",
        Active,
    ),
    entry(
        "Bitwarden",
        "Open-source password management solution",
        "privacy",
        "fas fa-shield-alt",
        Active,
    ),
    entry(
        "Little Snitch",
        "Network monitor for outgoing connections",
        "privacy",
        "fas fa-eye",
        Active,
    ),
    entry("Ghostery", "Privacy-focused web browser extension", "privacy", "fas fa-ghost", Active),
    entry("uBlock Origin", "Efficient ad and tracker blocker", "privacy", "fas fa-ban", Active),
    entry("Pi-hole", "Network-wide ad blocking DNS server", "privacy", "fas fa-filter", Active),
    entry("Mullvad VPN", "Privacy-focused VPN service", "privacy", "fas fa-globe-americas", Active),
    entry(
        "Privoxy",
        "Non-caching web proxy with filtering capabilities",
        "privacy",
        "fas fa-filter",
        Active,
    ),
    // utility
    entry(
        "Kali Linux",
        "Penetration testing and ethical hacking distribution",
        "utility",
        "fab fa-linux",
        Active,
    ),
    entry(
        "Parrot Security OS",
        "GNU/Linux distribution for security and development",
        "utility",
        "fas fa-feather-alt",
        Active,
    ),
    entry(
        "BlackArch Linux",
        "Arch Linux-based penetration testing distribution",
        "utility",
        "fas fa-terminal",
        Active,
    ),
    entry(
        "VMware Workstation",
        "Desktop hypervisor for running virtual machines",
        "utility",
        "fas fa-layer-group",
        Active,
    ),
    entry(
        "VirtualBox",
        "Cross-platform virtualization application",
        "utility",
        "fas fa-box",
        Active,
    ),
    entry(
        "Docker",
        "Containerization platform for application deployment",
        "utility",
        "fab fa-docker",
        Active,
    ),
    entry(
        "Kubernetes",
        "Container orchestration system for automating deployment",
        "utility",
        "fas fa-dharmachakra",
        Active,
    ),
    entry(
        "Ansible",
        "IT automation tool for configuration management",
        "utility",
        "fas fa-cogs",
        Active,
    ),
    entry("Terraform", "Infrastructure as code software tool", "utility", "fas fa-cube", Active),
    entry("Git", "Distributed version control system", "utility", "fab fa-git-alt", Active),
    entry("Jenkins", "Open-source automation server for CI/CD", "utility", "fas fa-robot", Active),
    entry(
        "Nagios",
        "Computer system, network and infrastructure monitoring",
        "utility",
        "fas fa-heartbeat",
        Active,
    ),
    entry("Zabbix", "Enterprise-class monitoring solution", "utility", "fas fa-chart-line", Active),
    entry(
        "Splunk",
        "Platform for searching, monitoring and analyzing data",
        "utility",
        "fas fa-search",
        Active,
    ),
    entry(
        "ELK Stack",
        "Elasticsearch, Logstash, and Kibana for log analysis",
        "utility",
        "fas fa-chart-bar",
        Active,
    ),
    entry(
        "Grafana",
        "Multi-platform open-source analytics and monitoring",
        "utility",
        "fas fa-chart-area",
        Active,
    ),
    entry(
        "Prometheus",
        "Systems monitoring and alerting toolkit",
        "utility",
        "fas fa-fire",
        Active,
    ),
    entry(
        "pfSense",
        "Open-source firewall and router platform",
        "utility",
        "fas fa-shield-alt",
        Active,
    ),
    entry(
        "OPNsense",
        "Open-source firewall and routing platform",
        "utility",
        "fas fa-network-wired",
        Active,
    ),
    entry(
        "Advanced IP Scanner",
        "Network scanner for IP address and port scanning",
        "utility",
        "fas fa-network-wired",
        Active,
    ),
    // operations
    entry(
        "SIEM Splunk",
        "Security information and event management platform",
        "operations",
        "fas fa-search",
        Active,
    ),
    entry(
        "IBM QRadar",
        "Security intelligence platform for threat detection",
        "operations",
        "fas fa-brain",
        Active,
    ),
    entry(
        "ArcSight ESM",
        "Enterprise security manager for correlation",
        "operations",
        "fas fa-eye",
        Active,
    ),
    entry(
        "LogRhythm",
        "Security intelligence and analytics platform",
        "operations",
        "fas fa-chart-line",
        Active,
    ),
    entry(
        "Phantom SOAR",
        "Security orchestration, automation and response",
        "operations",
        "fas fa-robot",
        Active,
    ),
    entry(
        "Demisto SOAR",
        "Security orchestration and incident response",
        "operations",
        "fas fa-cogs",
        Active,
    ),
    entry(
        "Carbon Black",
        "Endpoint detection and response platform",
        "operations",
        "fas fa-desktop",
        Active,
    ),
    entry(
        "CrowdStrike Falcon",
        "Cloud-delivered endpoint protection platform",
        "operations",
        "fas fa-cloud",
        Active,
    ),
    entry(
        "SentinelOne",
        "Autonomous endpoint protection platform",
        "operations",
        "fas fa-shield-alt",
        Active,
    ),
    entry(
        "Cylance Protect",
        "AI-driven advanced threat prevention",
        "operations",
        "fas fa-brain",
        Active,
    ),
    entry(
        "FireEye HX",
        "Endpoint security and threat intelligence",
        "operations",
        "fas fa-fire",
        Active,
    ),
    entry(
        "Tanium",
        "Endpoint management and security platform",
        "operations",
        "fas fa-network-wired",
        Active,
    ),
    entry(
        "Rapid7 InsightIDR",
        "Incident detection and response solution",
        "operations",
        "fas fa-tachometer-alt",
        Active,
    ),
    entry(
        "AlienVault OSSIM",
        "Open-source security information management",
        "operations",
        "fas fa-alien-monster",
        Active,
    ),
    entry(
        "Security Onion",
        "Linux distribution for threat hunting",
        "operations",
        "fas fa-layer-group",
        Active,
    ),
    entry(
        "RTIR",
        "Request tracker for incident response",
        "operations",
        "fas fa-ticket-alt",
        Active,
    ),
    entry(
        "Maltego",
        "Open-source intelligence and graphical link analysis",
        "operations",
        "fas fa-project-diagram",
        Active,
    ),
    entry(
        "Shodan",
        "Search engine for Internet-connected devices",
        "operations",
        "fas fa-satellite",
        Active,
    ),
    entry(
        "VirusTotal",
        "Online service for analyzing suspicious files",
        "operations",
        "fas fa-virus",
        Active,
    ),
    entry("Hybrid Analysis", "Free malware analysis service", "operations", "fas fa-dna", Active),
];
