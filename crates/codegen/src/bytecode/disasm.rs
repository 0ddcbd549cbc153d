//! Human-readable disassembly of compiled modules.

use super::function::Function;
use super::module::BytecodeModule;
use super::opcode::Opcode;
use brio_parser::NameTable;
use std::fmt::Write;

/// Render every function of `module`, in insertion order.
pub fn disassemble(module: &BytecodeModule, names: &NameTable) -> String {
    let mut out = String::new();
    for func in module.functions.values() {
        out.push_str(&disassemble_function(func, module, names));
        out.push('\n');
    }
    out
}

/// Render one function: a header line, then one line per instruction.
pub fn disassemble_function(func: &Function, module: &BytecodeModule, names: &NameTable) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Function {}(args = {}, locals = {}):",
        names.name_of(func.name),
        func.arg_count,
        func.local_count
    );

    for (idx, inst) in func.instructions.iter().enumerate() {
        let _ = write!(out, "\t+{:04}: {}", idx, inst.opcode.mnemonic());
        match inst.opcode {
            Opcode::LoadInt => {
                let _ = write!(out, "\t{}", inst.operand.as_u64());
            }
            Opcode::LoadNum => {
                let _ = write!(out, "\t{}", inst.operand.as_f64());
            }
            Opcode::LoadBool => {
                let _ = write!(out, "\t{}", inst.operand.as_bool());
            }
            Opcode::LoadStr => {
                let _ = write!(out, "\t{:?}", module.str_lits[inst.operand.as_index()]);
            }
            Opcode::LoadLocal
            | Opcode::StoreLocal
            | Opcode::Jump
            | Opcode::JumpZero
            | Opcode::JumpNotZero => {
                let _ = write!(out, "\t{}", inst.operand.as_index());
            }
            Opcode::LoadGlobal | Opcode::StoreGlobal | Opcode::GetProp | Opcode::SetProp => {
                let _ = write!(out, "\t{}", names.name_of(inst.operand.as_name()));
            }
            Opcode::Call | Opcode::PopN => {
                let _ = write!(out, "\t{}", inst.operand.as_index());
            }
            _ => {}
        }
        out.push('\n');
    }
    out
}
