// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! daysuntil - count the days since and until the events in your event lists

use std::process::ExitCode;

fn main() -> ExitCode {
    daysuntil_cli::run()
}
