//! The fixed table of agents that `setup-agents` writes to disk.

use super::AgentConfig;

/// A compiled-in agent definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinAgent {
    /// Stable machine-readable name, used as the file stem.
    pub name: &'static str,
    pub description: &'static str,
    pub expertise: &'static [&'static str],
    pub guidelines: &'static [&'static str],
}

impl BuiltinAgent {
    /// Convert to an owned record ready for serialization.
    pub fn to_config(&self) -> AgentConfig {
        AgentConfig {
            name: self.name.to_string(),
            description: self.description.to_string(),
            expertise: self.expertise.iter().map(|s| s.to_string()).collect(),
            guidelines: self.guidelines.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Every built-in agent, in the order they are written.
const BUILTIN_AGENTS: &[BuiltinAgent] = &[
    BuiltinAgent {
        name: "mcp-implementation",
        description: "Implement core MCP server functionality and protocol compliance",
        expertise: &[
            "MCP protocol implementation",
            "JSON-RPC 2.0 message handling",
            "stdio transport setup",
            "Tool registration systems",
            "Protocol initialization and capability negotiation",
        ],
        guidelines: &[
            "Follow MCP SDK documentation strictly",
            "Ensure all tools are stateless",
            "Implement proper error handling for protocol messages",
            "Use TypeScript with strict type checking",
            "Reference HLD.md for architectural decisions",
        ],
    },
    BuiltinAgent {
        name: "database-architect",
        description: "Design and implement SQLite database schema and operations",
        expertise: &[
            "SQLite database design",
            "Schema migrations",
            "Query optimization",
            "Transaction management",
            "Database performance tuning",
        ],
        guidelines: &[
            "Use exact schema from HLD.md",
            "Enable WAL mode for concurrency",
            "Implement atomic transactions for all write operations",
            "Create indexes for common query patterns",
            "Use better-sqlite3 synchronous API",
        ],
    },
    BuiltinAgent {
        name: "tool-implementer",
        description: "Implement individual MCP tools according to specifications",
        expertise: &[
            "MCP tool implementation",
            "Zod schema validation",
            "Error handling patterns",
            "Response formatting",
            "Stateless design patterns",
        ],
        guidelines: &[
            "Each tool must complete in single request/response",
            "Use Zod for all input validation",
            "Follow standard response format from HLD.md",
            "Implement comprehensive error handling",
            "Never expose internal errors to users",
        ],
    },
    BuiltinAgent {
        name: "search-optimizer",
        description: "Implement and optimize search functionality with SQLite FTS5",
        expertise: &[
            "SQLite FTS5 configuration",
            "Full-text search optimization",
            "Query parsing and sanitization",
            "Search result ranking",
            "Snippet generation",
        ],
        guidelines: &[
            "Configure FTS5 for conversation search",
            "Implement proper query sanitization",
            "Add BM25 ranking for relevance",
            "Generate contextual snippets",
            "Handle special characters in queries",
        ],
    },
    BuiltinAgent {
        name: "test-engineer",
        description: "Create comprehensive test suite for all components",
        expertise: &[
            "Jest testing framework",
            "Unit test design",
            "Integration testing",
            "Mock strategies",
            "Test coverage analysis",
        ],
        guidelines: &[
            "Aim for >80% code coverage",
            "Test both success and error paths",
            "Create integration tests for MCP protocol",
            "Use in-memory SQLite for test isolation",
            "Test concurrent operations",
        ],
    },
];

/// Return the built-in agent table.
pub fn builtin_agents() -> &'static [BuiltinAgent] {
    BUILTIN_AGENTS
}
