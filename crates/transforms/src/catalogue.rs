//! Read-only technique library: one entry per obfuscate operator with a
//! description and a canonical example input for one-operator demos.

use crate::{Choice, OperatorId};
use rustveil_core::SourceBuffer;
use serde::Serialize;

/// A documented obfuscation technique.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Technique {
    pub id: OperatorId,
    pub title: &'static str,
    pub description: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
    /// Canonical input the demo starts from.
    pub example: &'static str,
}

impl Technique {
    /// Runs the technique's operator once over `input`.
    pub fn demo(&self, input: &SourceBuffer, choice: &mut dyn Choice) -> SourceBuffer {
        self.id.transform().apply(input, choice)
    }

    /// Runs the technique over its own example input.
    pub fn demo_example(&self, choice: &mut dyn Choice) -> SourceBuffer {
        self.demo(&SourceBuffer::from(self.example), choice)
    }
}

pub static CATALOGUE: [Technique; 8] = [
    Technique {
        id: OperatorId::NumericDiffusion,
        title: "Arithmetic Obfuscation",
        description: "Replaces numeric literals with arithmetic expressions that evaluate \
                      to the original number, obscuring the values actually used.",
        pros: &[
            "Hides constants and magic numbers.",
            "Simple to implement and low performance overhead.",
        ],
        cons: &[
            "Easily reversed by compilers or simple analysis.",
            "Can slightly increase code size.",
        ],
        example: "let version = 10;\nlet retries = 30;",
    },
    Technique {
        id: OperatorId::OpaquePredicate,
        title: "Opaque Predicates",
        description: "Swaps literal conditions for expressions that always evaluate the \
                      same way but read like real logic.",
        pros: &[
            "Breaks linear code flow, confusing static analysis tools.",
            "Can be used to insert large amounts of dead code.",
        ],
        cons: &[
            "Modern compilers may optimize away simple predicates.",
            "Can be fingerprinted if the same patterns are used repeatedly.",
        ],
        example: "if true {\n    println!(\"Critical operation\");\n}",
    },
    Technique {
        id: OperatorId::DeadCodeInsertion,
        title: "Dead Code Insertion",
        description: "Adds statements at the start of every function that compile but \
                      never influence the result.",
        pros: &[
            "Pads functions with noise a reader must rule out.",
            "No effect on program behaviour.",
        ],
        cons: &[
            "Removed by the optimizer in release builds.",
            "A fixed snippet set is easy to recognise.",
        ],
        example: "fn main() {\n    run();\n}",
    },
    Technique {
        id: OperatorId::IdentifierRenaming,
        title: "Identifier Renaming",
        description: "Replaces meaningful binding names with numbered placeholders \
                      throughout the snippet.",
        pros: &[
            "Strips the intent carried by names.",
            "Consistent within a snippet, so the code still compiles.",
        ],
        cons: &[
            "Does not touch function or type names.",
            "Plain word matching can rename fields sharing a binding's name.",
        ],
        example: "let total = 0;\nlet count = total + 1;",
    },
    Technique {
        id: OperatorId::ControlFlowRestructuring,
        title: "Control Flow Restructuring",
        description: "Rewrites two-branch if/else statements as a match on the boolean \
                      condition.",
        pros: &[
            "Changes the visual shape of branching logic.",
            "Semantically equivalent for boolean conditions.",
        ],
        cons: &[
            "Nested blocks are not recognised.",
            "Trivially reversed.",
        ],
        example: "if ready {\n    start();\n} else {\n    wait();\n}",
    },
    Technique {
        id: OperatorId::StringConstantExtraction,
        title: "String Constant Extraction",
        description: "Moves string literals into numbered constants declared at the top \
                      of the snippet.",
        pros: &[
            "Separates text from the code that uses it.",
            "Fully reversible.",
        ],
        cons: &[
            "Constants cannot stand in for format strings.",
            "The literal is still present verbatim.",
        ],
        example: "let greeting = \"Hello World\";\nlet target = \"production\";",
    },
    Technique {
        id: OperatorId::StringEncoding,
        title: "String Encryption",
        description: "Hides string literals behind an encoding that is only decoded at \
                      runtime, so they do not appear verbatim in the source.",
        pros: &[
            "Effectively hides sensitive string data.",
            "Makes it much harder to understand the program's purpose.",
        ],
        cons: &[
            "Adds runtime performance overhead due to decoding.",
            "Requires a decoding routine to be included in the binary.",
        ],
        example: "let api_key = \"SECRET_KEY\";\nlet message = \"Hello World\";",
    },
    Technique {
        id: OperatorId::StringSplitting,
        title: "String Splitting",
        description: "Breaks a string literal into two halves concatenated at compile \
                      time, defeating simple text searches for the whole string.",
        pros: &[
            "Defeats basic string search tools.",
            "Very low performance impact compared to encryption.",
        ],
        cons: &[
            "Easily defeated by more advanced analysis.",
            "Can make source code harder to maintain.",
        ],
        example: "let command = \"launch_missiles\";",
    },
];

/// Catalogue entry for `id`, if it is an obfuscate operator.
pub fn technique(id: OperatorId) -> Option<&'static Technique> {
    CATALOGUE.iter().find(|t| t.id == id)
}
