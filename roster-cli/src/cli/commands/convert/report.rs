//! Operator-facing progress and summary output

use colored::*;
use std::path::Path;

use crate::roster::{Conversion, SheetProgress};

const RULE_WIDTH: usize = 50;

pub fn print_paths(input: &Path, output: &Path) {
    println!("📂 원본 파일: {}", input.display().to_string().cyan());
    println!("📝 출력 파일: {}", output.display().to_string().cyan());
    println!();
}

pub fn print_sheet_progress(progress: SheetProgress<'_>) {
    match progress {
        SheetProgress::Started { title, group } => {
            println!("📋 시트 처리 중: {} → 구역명: {}", title, group.bold());
        }
        SheetProgress::Finished(sheet) if sheet.count > 0 => {
            println!("   {}", format!("✅ {}명 변환됨", sheet.count).green());
        }
        SheetProgress::Finished(_) => {
            println!("   {}", "⚠️ 데이터 없음".yellow());
        }
    }
}

pub fn print_summary(conversion: &Conversion, output: &Path) {
    println!();
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{}", "✅ 변환 완료!".bright_green().bold());
    println!("📊 총 {}명의 회원 데이터가 변환되었습니다.", conversion.total());
    println!();
    println!("📈 구역별 현황:");
    for line in group_lines(conversion) {
        println!("{}", line);
    }
    println!();
    println!("💾 출력 파일: {}", output.display().to_string().bright_green());
    println!();
    println!("🚀 이제 관리자 페이지에서 이 파일을 업로드하세요!");
}

/// Per-district count lines, sorted by district label
fn group_lines(conversion: &Conversion) -> Vec<String> {
    conversion
        .groups
        .iter()
        .map(|(group, count)| format!("   - {}: {}명", group, count))
        .collect()
}
