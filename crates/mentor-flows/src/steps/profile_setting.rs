use mentor_core::flow_steps;

flow_steps! {
    pub enum ProfileSettingStep {
        Nickname {
            main_title: "닉네임을 정해주세요",
            sub_title: "다른 사용자에게 보여지는 이름이에요",
            action_label: "다음",
        },
        Interests {
            main_title: "관심 분야를 선택해주세요",
            sub_title: "맞춤 멘토 추천에 활용돼요",
            action_label: "다음",
        },
        Photo {
            main_title: "프로필 사진을 등록해주세요",
            sub_title: "나중에 언제든 바꿀 수 있어요",
            action_label: "완료",
        },
    }
}
