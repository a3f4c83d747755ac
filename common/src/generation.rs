//! 取得要求の世代管理
//!
//! 取得のたびに新しいチケットを発行し、最後に発行したチケットの応答だけを受け入れる。
//! 識別子を素早く切り替えたとき、遅れて届いた古い応答で表示が巻き戻らないようにする。

/// 発行済みの取得要求を表すチケット
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

/// 世代カウンタ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchGeneration {
    latest: u64,
}

impl FetchGeneration {
    /// 新しい取得要求を発行（以前のチケットはすべて無効になる）
    pub fn issue(&mut self) -> FetchTicket {
        self.latest = self.latest.wrapping_add(1);
        FetchTicket(self.latest)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }
}
