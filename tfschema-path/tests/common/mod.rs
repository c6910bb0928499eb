//! Shared fixtures for path resolution tests.

#![allow(dead_code)]

use serde_json::json;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tfschema_path::ProviderSchema;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

pub const AWS: &str = "registry.terraform.io/hashicorp/aws";
pub const GOOGLE: &str = "registry.terraform.io/hashicorp/google";

/// Routes `tracing` output through the test harness. Set `RUST_LOG=debug`
/// to see why a path failed to resolve.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a debug-level subscriber installed on this thread and
/// returns everything it logged.
pub fn capture_logs<F: FnOnce()>(f: F) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

/// A two-provider schema covering every shape the resolver distinguishes.
pub fn fixture() -> ProviderSchema {
    let document = json!({
        "format_version": "1.0",
        "provider_schemas": {
            AWS: {
                "provider": {
                    "version": 0,
                    "block": {
                        "attributes": {
                            "region": {"type": "string", "optional": true},
                            "allowed_account_ids": {"type": ["set", "string"], "optional": true}
                        },
                        "block_types": {
                            "assume_role": {
                                "nesting_mode": "list",
                                "max_items": 1,
                                "block": {
                                    "attributes": {
                                        "role_arn": {"type": "string", "optional": true}
                                    }
                                }
                            }
                        }
                    }
                },
                "resource_schemas": {
                    "aws_instance": {
                        "version": 1,
                        "block": {
                            "attributes": {
                                "ami": {"type": "string", "required": true},
                                "id": {"type": "string", "computed": true},
                                "tags": {"type": ["map", "string"], "optional": true},
                                "security_groups": {"type": ["set", "string"], "optional": true, "computed": true},
                                "cpu_core_count": {"type": "number", "computed": true}
                            },
                            "block_types": {
                                "ebs_block_device": {
                                    "nesting_mode": "set",
                                    "block": {
                                        "attributes": {
                                            "device_name": {"type": "string", "required": true},
                                            "volume_size": {"type": "number", "optional": true}
                                        },
                                        "block_types": {
                                            "kms": {
                                                "nesting_mode": "single",
                                                "block": {
                                                    "attributes": {
                                                        "key_id": {"type": "string", "optional": true}
                                                    }
                                                }
                                            }
                                        }
                                    }
                                },
                                "timeouts": {
                                    "nesting_mode": "single",
                                    "block": {
                                        "attributes": {
                                            "create": {"type": "string", "optional": true}
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "aws_security_group": {
                        "version": 1,
                        "block": {
                            "attributes": {
                                "name": {"type": "string", "optional": true},
                                "ingress": {
                                    "type": ["set", ["object", {
                                        "from_port": "number",
                                        "description": "string",
                                        "cidr_blocks": ["list", "string"]
                                    }]],
                                    "optional": true
                                },
                                "labels": {
                                    "type": ["map", ["object", {"value": "string"}]],
                                    "optional": true
                                },
                                "owner": {
                                    "type": ["object", {"team": "string"}],
                                    "optional": true
                                },
                                "config": {"type": "string", "optional": true}
                            },
                            "block_types": {
                                "config": {
                                    "nesting_mode": "list",
                                    "max_items": 1,
                                    "block": {
                                        "attributes": {
                                            "mode": {"type": "string", "optional": true}
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "data_source_schemas": {
                    "aws_ami": {
                        "version": 0,
                        "block": {
                            "attributes": {
                                "id": {"type": "string", "computed": true},
                                "block_device_mappings": {
                                    "type": ["list", ["object", {
                                        "device_name": "string",
                                        "ebs": ["map", "string"]
                                    }]],
                                    "computed": true
                                }
                            }
                        }
                    }
                }
            },
            GOOGLE: {
                "provider": {
                    "version": 0,
                    "block": {
                        "attributes": {
                            "project": {"type": "string", "optional": true}
                        }
                    }
                },
                "resource_schemas": {
                    "google_compute_instance": {
                        "version": 6,
                        "block": {
                            "attributes": {
                                "machine_type": {"type": "string", "required": true},
                                "metadata": {"type": ["map", "string"], "optional": true}
                            }
                        }
                    }
                }
            }
        }
    });

    ProviderSchema::from_json_str(&document.to_string()).unwrap()
}
