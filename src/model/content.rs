// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static page content: services, testimonials, blog teasers.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        title: "Managed Detection & Response",
        blurb: "24/7 monitoring of your estate with analyst-led triage and a four-minute median response.",
    },
    Service {
        title: "Penetration Testing",
        blurb: "Scenario-driven offensive engagements against your applications, networks, and people.",
    },
    Service {
        title: "Cloud Security Posture",
        blurb: "Continuous misconfiguration and drift detection across AWS, Azure, and GCP accounts.",
    },
    Service {
        title: "Incident Response",
        blurb: "Retained responders who contain, eradicate, and document breaches when minutes matter.",
    },
    Service {
        title: "Threat Intelligence",
        blurb: "Curated adversary tracking mapped to your sector, delivered as actionable detections.",
    },
    Service {
        title: "Compliance Readiness",
        blurb: "SOC 2, ISO 27001, and PCI gap assessments with remediation plans your team can execute.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Cyvance caught lateral movement our previous vendor missed for weeks. The first call came four minutes after detection.",
        author: "Dana Whitfield",
        role: "CISO, Meridian Health",
    },
    Testimonial {
        quote: "Their pentest report read like an attack diary. Every finding came with a working fix, not just a CVSS number.",
        author: "Arjun Mehta",
        role: "VP Engineering, Lattice Freight",
    },
    Testimonial {
        quote: "We passed SOC 2 Type II on the first audit. Cyvance's readiness work paid for itself before the engagement ended.",
        author: "Sofia Reyes",
        role: "COO, Brightline Capital",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub read_minutes: u32,
}

pub const BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        title: "Anatomy of a Four-Minute Response",
        excerpt: "What actually happens inside our SOC between a detection firing and an analyst on the phone.",
        date: "Jul 28, 2026",
        read_minutes: 7,
    },
    BlogPost {
        title: "Cloud Drift Is Your Quietest Attack Surface",
        excerpt: "Misconfigurations rarely announce themselves. Here is how drift creeps in and how we watch for it.",
        date: "Jul 14, 2026",
        read_minutes: 5,
    },
    BlogPost {
        title: "Phishing Kits Are Getting Boring, and That's the Problem",
        excerpt: "Commodity kits now clear most secure email gateways. A look at the economics behind the flood.",
        date: "Jun 30, 2026",
        read_minutes: 6,
    },
];
