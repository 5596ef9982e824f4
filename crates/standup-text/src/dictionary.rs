//! Fixed vocabulary for the dictionary-backed Thai segmenter.
//!
//! Common words from engineering standup reports: project, process and
//! software terms plus the frequent `การ` nominalizations.

use once_cell::sync::Lazy;
use std::collections::HashSet;

pub const THAI_WORDS: &[&str] = &[
	"พัฒนา", "ระบบ", "การ", "เข้าสู่", "เสร็จ", "สมบูรณ์", "แล้ว", "ทดสอบ",
	"แจ้ง", "เตือน", "ข้อมูล", "ผู้ใช้", "งาน", "วันนี้", "แก้ไข", "ปัญหา",
	"เชื่อมต่อ", "ฐานข้อมูล", "ปรับปรุง", "หน้า", "หลัก", "ออกแบบ", "ส่วน", "ติดต่อ",
	"ประสิทธิภาพ", "พร้อม", "ทำงาน", "เพิ่ม", "คุณสมบัติ", "ใหม่", "สำหรับ", "แอป",
	"มือถือ", "อัพเดท", "ล่าสุด", "ติดตั้ง", "เซิร์ฟเวอร์", "สำเร็จ", "ตรวจสอบ", "ความ",
	"ปลอดภัย", "งานที่เสร็จแล้ว", "กำลังดำเนินการ", "ปัญหาที่พบ", "พรุ่งนี้", "เมื่อวาน", "รายงาน", "ประจำวัน",
	"ทีม", "วิศวกรรม", "ผลิตภัณฑ์", "การตลาด", "ขาย", "ลูกค้า", "โครงการ", "แผน",
	"กำหนดการ", "เป้าหมาย", "ความคืบหน้า", "การประชุม", "สรุป", "ผลลัพธ์", "ทรัพยากร", "งบประมาณ",
	"เวลา", "คุณภาพ", "มาตรฐาน", "ความเสี่ยง", "โอกาส", "กลยุทธ์", "ยุทธศาสตร์", "นโยบาย",
	"ข้อเสนอแนะ", "คำแนะนำ", "ข้อคิดเห็น", "ความคิดเห็น", "ข้อสังเกต", "ข้อสรุป", "ข้อตกลง", "สัญญา",
	"ข้อกำหนด", "เงื่อนไข", "ข้อจำกัด", "อุปสรรค", "ความท้าทาย", "ความสำเร็จ", "ความล้มเหลว", "บทเรียน",
	"ประสบการณ์", "ความรู้", "ทักษะ", "ความสามารถ", "ศักยภาพ", "เปลี่ยนแปลง", "นวัตกรรม", "เทคโนโลยี",
	"อุปกรณ์", "เครื่องมือ", "ซอฟต์แวร์", "ฮาร์ดแวร์", "แพลตฟอร์ม", "แอปพลิเคชัน", "โปรแกรม", "โค้ด",
	"สารสนเทศ", "ปัญญา", "การวิเคราะห์", "การออกแบบ", "การพัฒนา", "การทดสอบ", "การติดตั้ง", "การใช้งาน",
	"การบำรุงรักษา", "การสนับสนุน", "การฝึกอบรม", "การเรียนรู้", "การสอน", "การแนะนำ", "การช่วยเหลือ", "การแก้ไข",
	"การปรับปรุง", "การเพิ่ม", "การลด", "การเปลี่ยน", "การย้าย", "การโอน", "การส่ง", "การรับ",
	"การเก็บ", "การจัดเก็บ", "การค้นหา", "การค้นคืน", "การประมวลผล", "การแสดงผล", "การพิมพ์", "การสแกน",
	"การถ่าย", "การบันทึก", "การเล่น", "การหยุด", "การเริ่ม", "การจบ", "การเปิด", "การปิด",
];

static DICTIONARY: Lazy<HashSet<&'static str>> = Lazy::new(|| THAI_WORDS.iter().copied().collect());

pub fn thai_dictionary() -> &'static HashSet<&'static str> {
	&*DICTIONARY
}
